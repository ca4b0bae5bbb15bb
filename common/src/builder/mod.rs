//! # Formula Builder Core
//!
//! In-memory model of a formula under construction. Everything here is
//! synchronous and free of I/O: each mutation runs to completion before the
//! next UI event is handled, and derived values (price, dosage bands) are
//! recomputed from the current selection on demand.
//!
//! ## Sub-modules:
//! - `selection`: the Selection Store and slider bounds.
//! - `safety`: Safe / High / TooHigh dosage banding.
//! - `pricing`: ingredient cost, packaging and subscription modifiers.
//! - `summary`: `FormulaDraft` and the record assembler.
//! - `session`: the builder session state machine.

pub mod pricing;
pub mod safety;
pub mod selection;
pub mod session;
pub mod summary;

pub use pricing::{PriceBreakdown, final_price, format_price, formula_cost, line_cost, round_cents};
pub use safety::DosageBand;
pub use selection::{DosageRange, SelectedIngredient, SelectionStore};
pub use session::{BuilderSession, BuilderStage};
pub use summary::{FormulaDraft, assemble, reconcile, validate_record};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::catalog::{CatalogIngredient, Category, RecommendedDose, Source};
    use std::sync::Arc;

    pub fn vit_d3() -> Arc<CatalogIngredient> {
        Arc::new(CatalogIngredient {
            id: "vit-d3".to_string(),
            name: "Vitamin D3 (Cholecalciferol)".to_string(),
            description: "Essential for bone health, immunity, and mood".to_string(),
            unit: "IU".to_string(),
            max_dosage: 4000.0,
            recommended_dose: RecommendedDose { men: 600.0, women: 600.0 },
            category: Category::Vitamins,
            tags: vec!["bone".to_string(), "immunity".to_string(), "mood".to_string()],
            price_per_hundred_units: 0.05,
            forms: vec!["capsule".to_string(), "liquid".to_string(), "gummy".to_string()],
            source: Source::Animal,
        })
    }

    pub fn ingredient(id: &str, max_dosage: f64, price: f64) -> Arc<CatalogIngredient> {
        Arc::new(CatalogIngredient {
            id: id.to_string(),
            name: format!("Ingredient {id}"),
            description: String::new(),
            unit: "mg".to_string(),
            max_dosage,
            recommended_dose: RecommendedDose {
                men: max_dosage * 0.4,
                women: max_dosage * 0.3,
            },
            category: Category::Minerals,
            tags: Vec::new(),
            price_per_hundred_units: price,
            forms: vec!["capsule".to_string(), "powder".to_string()],
            source: Source::Mineral,
        })
    }
}
