//! Formula-level configuration enums and the persistable formula record.
//!
//! These types travel between the frontend and the backend as JSON. The
//! in-progress state (`FormulaDraft`, `SelectionStore`) lives in
//! `crate::builder`; this module only holds what gets stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product family chosen when a builder session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Supplement,
    Skincare,
    Wellness,
    Performance,
    Sleep,
    Liquid,
}

impl ProductType {
    pub const ALL: [ProductType; 6] = [
        ProductType::Supplement,
        ProductType::Skincare,
        ProductType::Wellness,
        ProductType::Performance,
        ProductType::Sleep,
        ProductType::Liquid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Supplement => "Health Supplements",
            ProductType::Skincare => "Skincare Formulas",
            ProductType::Wellness => "Wellness Blends",
            ProductType::Performance => "Performance Nutrition",
            ProductType::Sleep => "Sleep & Recovery",
            ProductType::Liquid => "Liquid Formulas",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProductType::Supplement => "Custom vitamins, minerals, and nutritional supplements",
            ProductType::Skincare => "Personalized serums, creams, and treatments",
            ProductType::Wellness => "Holistic health and lifestyle support",
            ProductType::Performance => "Athletic and cognitive performance enhancement",
            ProductType::Sleep => "Optimize rest and recovery cycles",
            ProductType::Liquid => "Fast-absorbing liquid supplements and tonics",
        }
    }
}

/// How the finished formula is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryForm {
    #[default]
    Capsule,
    Powder,
    Liquid,
    Gummy,
}

impl DeliveryForm {
    pub const ALL: [DeliveryForm; 4] = [
        DeliveryForm::Capsule,
        DeliveryForm::Powder,
        DeliveryForm::Liquid,
        DeliveryForm::Gummy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryForm::Capsule => "Capsules",
            DeliveryForm::Powder => "Powder",
            DeliveryForm::Liquid => "Liquid",
            DeliveryForm::Gummy => "Gummies",
        }
    }

    /// Label-preview serving size for a formula with `ingredient_count` entries.
    pub fn daily_serving(&self, ingredient_count: usize) -> String {
        match self {
            DeliveryForm::Powder => "1 scoop".to_string(),
            DeliveryForm::Capsule => format!("{} capsules", ingredient_count.div_ceil(3)),
            DeliveryForm::Liquid | DeliveryForm::Gummy => "1 serving".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackagingOption {
    #[default]
    EcoPouch,
    GlassJar,
    TravelPack,
}

impl PackagingOption {
    pub const ALL: [PackagingOption; 3] = [
        PackagingOption::EcoPouch,
        PackagingOption::GlassJar,
        PackagingOption::TravelPack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PackagingOption::EcoPouch => "Eco Pouch",
            PackagingOption::GlassJar => "Glass Jar",
            PackagingOption::TravelPack => "Travel Pack",
        }
    }

    /// Flat amount added to the monthly price.
    pub fn surcharge(&self) -> f64 {
        match self {
            PackagingOption::EcoPouch => 0.0,
            PackagingOption::GlassJar => 5.0,
            PackagingOption::TravelPack => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionPlan {
    #[default]
    Monthly,
    Quarterly,
    OneTime,
}

impl SubscriptionPlan {
    pub const ALL: [SubscriptionPlan; 3] = [
        SubscriptionPlan::Monthly,
        SubscriptionPlan::Quarterly,
        SubscriptionPlan::OneTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionPlan::Monthly => "Monthly",
            SubscriptionPlan::Quarterly => "Every 3 Months",
            SubscriptionPlan::OneTime => "One-Time Purchase",
        }
    }

    /// Percentage taken off the ingredient cost.
    pub fn discount_percent(&self) -> f64 {
        match self {
            SubscriptionPlan::Quarterly => 10.0,
            SubscriptionPlan::Monthly | SubscriptionPlan::OneTime => 0.0,
        }
    }
}

/// One ingredient line of a stored formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIngredient {
    pub id: String,
    pub name: String,
    pub dosage: f64,
    pub unit: String,
    pub form: String,
}

/// Immutable snapshot of a finished formula, ready to hand to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaRecord {
    pub name: String,
    pub product_type: ProductType,
    pub ingredients: Vec<RecordIngredient>,
    pub delivery_form: DeliveryForm,
    pub packaging: PackagingOption,
    pub subscription: SubscriptionPlan,
    /// Sum of the ingredient costs, before packaging and subscription.
    pub formula_cost: f64,
    /// Final monthly price after packaging and subscription.
    pub total_cost: f64,
    pub daily_serving: String,
    /// Goals the formula was built for, in the order they were picked.
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A record as returned by the formula storage API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFormula {
    pub id: String,
    pub record: FormulaRecord,
    pub updated_at: DateTime<Utc>,
}
