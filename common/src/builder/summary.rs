//! # Formula Summary Assembler
//!
//! Turns an in-progress `FormulaDraft` into an immutable `FormulaRecord`. The
//! assembler is a pure transformation: it performs no I/O and does not consume
//! the draft. Handing the record to storage is the caller's job.
//!
//! Records that arrive from outside the builder go through `reconcile`, which
//! checks them against the catalog and recomputes every derived figure.

use crate::builder::pricing::{PriceBreakdown, final_price, line_cost};
use crate::builder::selection::SelectionStore;
use crate::catalog::Catalog;
use crate::error::FormulaError;
use crate::model::formula::{
    DeliveryForm, FormulaRecord, PackagingOption, ProductType, RecordIngredient, SubscriptionPlan,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const DEFAULT_FORMULA_NAME: &str = "My Custom Formula";
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A formula under construction, exclusively owned by one builder session.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaDraft {
    pub name: String,
    pub product_type: ProductType,
    pub selection: SelectionStore,
    pub delivery_form: DeliveryForm,
    pub packaging: PackagingOption,
    pub subscription: SubscriptionPlan,
    pub goals: Vec<String>,
    pub description: Option<String>,
}

impl FormulaDraft {
    pub fn new(product_type: ProductType) -> Self {
        Self {
            name: DEFAULT_FORMULA_NAME.to_string(),
            product_type,
            selection: SelectionStore::new(),
            delivery_form: DeliveryForm::default(),
            packaging: PackagingOption::default(),
            subscription: SubscriptionPlan::default(),
            goals: Vec::new(),
            description: None,
        }
    }

    pub fn quote(&self) -> PriceBreakdown {
        PriceBreakdown::quote(&self.selection, self.packaging, self.subscription)
    }

    pub fn daily_serving(&self) -> String {
        self.delivery_form.daily_serving(self.selection.len())
    }
}

/// Validates `name` and returns its trimmed form.
pub fn validate_name(name: &str) -> Result<&str, FormulaError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FormulaError::MissingName);
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(FormulaError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(trimmed)
}

/// Trims an optional description. Blank descriptions become `None`.
pub fn validate_description(description: Option<&str>) -> Result<Option<String>, FormulaError> {
    let Some(trimmed) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    let len = trimmed.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(FormulaError::DescriptionTooLong {
            len,
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(Some(trimmed.to_string()))
}

/// Snapshots `draft` as a record stamped with `created_at`.
///
/// Rejects a draft without ingredients, with an unusable name or with an
/// overlong description.
pub fn assemble(draft: &FormulaDraft, created_at: DateTime<Utc>) -> Result<FormulaRecord, FormulaError> {
    if draft.selection.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }
    let name = validate_name(&draft.name)?;
    let description = validate_description(draft.description.as_deref())?;

    let ingredients = draft
        .selection
        .iter()
        .map(|entry| RecordIngredient {
            id: entry.id().to_string(),
            name: entry.ingredient().name.clone(),
            dosage: entry.dosage(),
            unit: entry.ingredient().unit.clone(),
            form: entry.form().to_string(),
        })
        .collect();

    let quote = draft.quote();
    Ok(FormulaRecord {
        name: name.to_string(),
        product_type: draft.product_type,
        ingredients,
        delivery_form: draft.delivery_form,
        packaging: draft.packaging,
        subscription: draft.subscription,
        formula_cost: quote.formula_cost,
        total_cost: quote.final_price,
        daily_serving: draft.daily_serving(),
        goals: draft.goals.clone(),
        description,
        created_at,
    })
}

/// Checks a record received from elsewhere (e.g. over HTTP) against the same
/// rules `assemble` enforces. Catalog membership is left to `reconcile`.
pub fn validate_record(record: &FormulaRecord) -> Result<(), FormulaError> {
    if record.ingredients.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }
    validate_name(&record.name)?;
    validate_description(record.description.as_deref())?;
    let mut seen = HashSet::new();
    if let Some(dup) = record.ingredients.iter().find(|i| !seen.insert(i.id.as_str())) {
        return Err(FormulaError::DuplicateIngredient { id: dup.id.clone() });
    }
    if let Some(bad) = record
        .ingredients
        .iter()
        .find(|i| !(i.dosage.is_finite() && i.dosage > 0.0))
    {
        return Err(FormulaError::InvalidDosage {
            id: bad.id.clone(),
            dosage: bad.dosage,
        });
    }
    Ok(())
}

/// Validates `record` against `catalog` and rebuilds what the builder would
/// have derived: trimmed name and description, catalog names and units on
/// every line, both costs and the daily serving. Client-supplied figures are
/// discarded.
pub fn reconcile(mut record: FormulaRecord, catalog: &Catalog) -> Result<FormulaRecord, FormulaError> {
    validate_record(&record)?;
    record.name = validate_name(&record.name)?.to_string();
    record.description = validate_description(record.description.as_deref())?;
    record.goals = record
        .goals
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    let mut line_costs = Vec::with_capacity(record.ingredients.len());
    for line in &mut record.ingredients {
        let ingredient = catalog
            .get(&line.id)
            .ok_or_else(|| FormulaError::UnknownIngredient { id: line.id.clone() })?;
        if !ingredient.offers_form(&line.form) {
            return Err(FormulaError::InvalidForm {
                id: line.id.clone(),
                form: line.form.clone(),
            });
        }
        line.name = ingredient.name.clone();
        line.unit = ingredient.unit.clone();
        line_costs.push(line_cost(ingredient.price_per_hundred_units, line.dosage));
    }

    let cost: f64 = line_costs.into_iter().sum();
    record.formula_cost = cost;
    record.total_cost = final_price(
        cost,
        record.packaging.surcharge(),
        record.subscription.discount_percent(),
    );
    record.daily_serving = record.delivery_form.daily_serving(record.ingredients.len());
    Ok(record)
}
