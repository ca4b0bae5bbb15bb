//! # Ingredient Catalog
//!
//! Read-only reference data the builder picks ingredients from. A `Catalog` is
//! created once per session (or once per server process) and shared; entries
//! are handed out as `Arc<CatalogIngredient>` so selections reference the
//! catalog entry instead of copying it.
//!
//! ## Sub-modules:
//! - `data`: the built-in reference catalog.
//! - `stacks`: popular per-demographic stacks and the health goal list.
//! - `style`: the single category/source presentation lookup table.

mod data;
pub mod stacks;
pub mod style;

use crate::model::catalog::{search_needle, CatalogIngredient, Category};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate ingredient id '{0}'")]
    DuplicateId(String),

    #[error("ingredient '{0}' must have a positive maximum dosage")]
    InvalidMaxDosage(String),

    #[error("ingredient '{0}' must offer at least one form")]
    NoForms(String),

    #[error("ingredient '{0}' has a non-positive recommended dose")]
    InvalidRecommendedDose(String),

    #[error("ingredient '{0}' has an invalid price")]
    InvalidPrice(String),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Arc<CatalogIngredient>>,
}

impl Catalog {
    /// Builds a catalog, checking every entry and the uniqueness of ids.
    pub fn new(ingredients: Vec<CatalogIngredient>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(ingredients.len());
        for ingredient in &ingredients {
            validate_entry(ingredient)?;
            if !seen.insert(ingredient.id.as_str()) {
                return Err(CatalogError::DuplicateId(ingredient.id.clone()));
            }
        }
        debug!("catalog loaded with {} ingredients", ingredients.len());
        Ok(Self {
            ingredients: ingredients.into_iter().map(Arc::new).collect(),
        })
    }

    /// The reference catalog shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::builtin_ingredients())
    }

    /// Parses a JSON array of ingredients and validates it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let ingredients: Vec<CatalogIngredient> = serde_json::from_str(json)?;
        Self::new(ingredients)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<CatalogIngredient>> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogIngredient>> {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Entries whose name, description or tags contain `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Arc<CatalogIngredient>> + use<'a> {
        let needle = search_needle(term);
        self.ingredients.iter().filter(move |i| i.matches_needle(&needle))
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Arc<CatalogIngredient>> {
        self.ingredients.iter().filter(move |i| i.category == category)
    }

    /// Resolves a list of ids, skipping ids the catalog does not know.
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<Arc<CatalogIngredient>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter_map(|id| self.get(id).cloned())
            .collect()
    }
}

fn validate_entry(ingredient: &CatalogIngredient) -> Result<(), CatalogError> {
    if !(ingredient.max_dosage.is_finite() && ingredient.max_dosage > 0.0) {
        return Err(CatalogError::InvalidMaxDosage(ingredient.id.clone()));
    }
    if ingredient.forms.is_empty() {
        return Err(CatalogError::NoForms(ingredient.id.clone()));
    }
    let dose = ingredient.recommended_dose;
    if [dose.men, dose.women]
        .iter()
        .any(|d| !(d.is_finite() && *d > 0.0))
    {
        return Err(CatalogError::InvalidRecommendedDose(ingredient.id.clone()));
    }
    let price = ingredient.price_per_hundred_units;
    if !(price.is_finite() && price >= 0.0) {
        return Err(CatalogError::InvalidPrice(ingredient.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{RecommendedDose, Source};
    use pretty_assertions::assert_eq;

    fn entry(id: &str) -> CatalogIngredient {
        CatalogIngredient {
            id: id.to_string(),
            name: format!("Ingredient {id}"),
            description: "test entry".to_string(),
            unit: "mg".to_string(),
            max_dosage: 100.0,
            recommended_dose: RecommendedDose { men: 10.0, women: 8.0 },
            category: Category::Minerals,
            tags: vec!["sleep".to_string()],
            price_per_hundred_units: 0.1,
            forms: vec!["capsule".to_string()],
            source: Source::Mineral,
        }
    }

    #[test]
    fn builtin_catalog_satisfies_invariants() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.len(), 32);
        assert!(catalog.get("vit-d3").is_some());
        assert!(catalog.iter().all(|i| i.max_dosage > 0.0 && !i.forms.is_empty()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("zinc"), entry("zinc")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "zinc"));
    }

    #[test]
    fn rejects_zero_max_dosage_and_missing_forms() {
        let mut zero = entry("a");
        zero.max_dosage = 0.0;
        assert!(matches!(
            Catalog::new(vec![zero]),
            Err(CatalogError::InvalidMaxDosage(_))
        ));

        let mut formless = entry("b");
        formless.forms.clear();
        assert!(matches!(
            Catalog::new(vec![formless]),
            Err(CatalogError::NoForms(_))
        ));
    }

    #[test]
    fn search_matches_name_description_and_tags_case_insensitively() {
        let catalog = Catalog::builtin().unwrap();

        let by_name: Vec<_> = catalog.search("MAGNESIUM").map(|i| i.id.as_str()).collect();
        assert_eq!(by_name, vec!["magnesium"]);

        let by_tag: Vec<_> = catalog.search("adaptogen").map(|i| i.id.as_str()).collect();
        assert_eq!(by_tag, vec!["ashwagandha", "rhodiola"]);

        assert_eq!(catalog.search("   ").count(), catalog.len());
    }

    #[test]
    fn search_results_outlive_the_term() {
        let catalog = Catalog::builtin().unwrap();
        let results = {
            let term = String::from("  Magnesium ");
            catalog.search(&term)
        };
        let ids: Vec<_> = results.map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["magnesium"]);
    }

    #[test]
    fn filters_by_category() {
        let catalog = Catalog::builtin().unwrap();
        let omegas: Vec<_> = catalog
            .in_category(Category::FattyAcids)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(omegas, vec!["omega-3", "omega-3-vegan"]);
    }

    #[test]
    fn loads_from_json() {
        let json = r#"[{
            "id": "vit-d3",
            "name": "Vitamin D3",
            "description": "Bone health",
            "unit": "IU",
            "max_dosage": 4000,
            "recommended_dose": { "men": 600, "women": 600 },
            "category": "vitamins",
            "tags": ["bone"],
            "price_per_hundred_units": 0.05,
            "forms": ["capsule", "liquid"],
            "source": "animal"
        }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let d3 = catalog.get("vit-d3").unwrap();
        assert_eq!(d3.default_form(), Some("capsule"));
        assert_eq!(d3.category, Category::Vitamins);

        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn resolve_skips_unknown_ids() {
        let catalog = Catalog::builtin().unwrap();
        let resolved = catalog.resolve(["zinc", "unobtainium", "iron"]);
        let ids: Vec<_> = resolved.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["zinc", "iron"]);
    }
}
