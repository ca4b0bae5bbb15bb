//! # Selection Store
//!
//! Holds the ingredients of the formula being built, in the order they were
//! added. The store keys entries by catalog id and never holds two entries for
//! the same id. Mutations that reference an id the store does not hold are
//! no-ops and report `false`; invalid values are rejected with a
//! `FormulaError` and leave the store untouched.
//!
//! Range judgment is not the store's concern: any positive dosage is accepted
//! and the Safety Bander classifies it afterwards.

use crate::builder::pricing::line_cost;
use crate::builder::safety::DosageBand;
use crate::error::FormulaError;
use crate::model::catalog::{CatalogIngredient, Demographic};
use log::debug;
use std::sync::Arc;

/// An ingredient picked for the formula, with the user's dosage and form.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedIngredient {
    ingredient: Arc<CatalogIngredient>,
    dosage: f64,
    form: String,
}

impl SelectedIngredient {
    pub fn id(&self) -> &str {
        &self.ingredient.id
    }

    pub fn ingredient(&self) -> &CatalogIngredient {
        &self.ingredient
    }

    pub fn dosage(&self) -> f64 {
        self.dosage
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    /// Monthly cost contribution of this line.
    pub fn cost(&self) -> f64 {
        line_cost(self.ingredient.price_per_hundred_units, self.dosage)
    }

    pub fn band(&self) -> DosageBand {
        DosageBand::classify(self.dosage, self.ingredient.max_dosage)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    entries: Vec<SelectedIngredient>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `ingredient` with its default dosage and first form.
    ///
    /// Returns `false` without touching the store when the id is already
    /// selected, or when the entry offers no form at all.
    pub fn add(&mut self, ingredient: &Arc<CatalogIngredient>, demographic: Option<Demographic>) -> bool {
        if self.contains(&ingredient.id) {
            return false;
        }
        let Some(form) = ingredient.default_form() else {
            return false;
        };
        let dosage = ingredient.initial_dosage(demographic);
        debug!("selection: add '{}' at {} {}", ingredient.id, dosage, ingredient.unit);
        self.entries.push(SelectedIngredient {
            form: form.to_string(),
            dosage,
            ingredient: Arc::clone(ingredient),
        });
        true
    }

    /// Adds every ingredient in order, skipping ones already selected.
    /// Returns how many entries were added.
    pub fn add_many<'a, I>(&mut self, ingredients: I, demographic: Option<Demographic>) -> usize
    where
        I: IntoIterator<Item = &'a Arc<CatalogIngredient>>,
    {
        ingredients
            .into_iter()
            .filter(|ingredient| self.add(ingredient, demographic))
            .count()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!("selection: removed '{}'", id);
        }
        removed
    }

    pub fn set_dosage(&mut self, id: &str, dosage: f64) -> Result<bool, FormulaError> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) else {
            return Ok(false);
        };
        if !(dosage.is_finite() && dosage > 0.0) {
            return Err(FormulaError::InvalidDosage {
                id: id.to_string(),
                dosage,
            });
        }
        entry.dosage = dosage;
        Ok(true)
    }

    pub fn set_form(&mut self, id: &str, form: &str) -> Result<bool, FormulaError> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) else {
            return Ok(false);
        };
        if !entry.ingredient.offers_form(form) {
            return Err(FormulaError::InvalidForm {
                id: id.to_string(),
                form: form.to_string(),
            });
        }
        entry.form = form.to_string();
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Option<&SelectedIngredient> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[SelectedIngredient] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedIngredient> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a SelectionStore {
    type Item = &'a SelectedIngredient;
    type IntoIter = std::slice::Iter<'a, SelectedIngredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Slider bounds the UI offers for an ingredient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DosageRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl DosageRange {
    pub fn for_max(max_dosage: f64) -> Self {
        Self {
            min: max_dosage * 0.1,
            max: max_dosage,
            step: max_dosage * 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::test_support::{ingredient, vit_d3};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn add_seeds_dosage_from_demographic() {
        let d3 = vit_d3();
        let mut store = SelectionStore::new();
        assert!(store.add(&d3, Some(Demographic::Men)));

        let entry = store.get("vit-d3").unwrap();
        assert_eq!(entry.dosage(), 600.0);
        assert_eq!(entry.form(), "capsule");
        assert_eq!(entry.band(), DosageBand::Safe);
    }

    #[test]
    fn add_without_demographic_uses_half_of_max() {
        let mut store = SelectionStore::new();
        store.add(&ingredient("iron", 45.0, 0.18), None);
        assert_eq!(store.get("iron").unwrap().dosage(), 23.0);
    }

    #[test]
    fn half_of_tiny_max_stays_positive() {
        let mut store = SelectionStore::new();
        store.add(&ingredient("trace", 0.6, 1.0), None);
        assert_eq!(store.get("trace").unwrap().dosage(), 0.3);
    }

    #[test]
    fn add_is_idempotent() {
        let d3 = vit_d3();
        let mut store = SelectionStore::new();
        assert!(store.add(&d3, Some(Demographic::Men)));
        store.set_dosage("vit-d3", 1000.0).unwrap();
        assert!(!store.add(&d3, Some(Demographic::Women)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("vit-d3").unwrap().dosage(), 1000.0);
    }

    #[test]
    fn missing_ids_are_no_ops() {
        let mut store = SelectionStore::new();
        assert!(!store.remove("ghost"));
        assert_eq!(store.set_dosage("ghost", 10.0), Ok(false));
        assert_eq!(store.set_form("ghost", "capsule"), Ok(false));
        assert!(store.is_empty());
    }

    #[test]
    fn set_dosage_accepts_out_of_range_but_rejects_non_positive() {
        let d3 = vit_d3();
        let mut store = SelectionStore::new();
        store.add(&d3, Some(Demographic::Men));

        assert_eq!(store.set_dosage("vit-d3", 4200.0), Ok(true));
        assert_eq!(store.get("vit-d3").unwrap().band(), DosageBand::TooHigh);

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                store.set_dosage("vit-d3", bad),
                Err(FormulaError::InvalidDosage { .. })
            ));
        }
        assert_eq!(store.get("vit-d3").unwrap().dosage(), 4200.0);
    }

    #[test]
    fn set_form_only_accepts_offered_forms() {
        let d3 = vit_d3();
        let mut store = SelectionStore::new();
        store.add(&d3, None);

        assert_eq!(store.set_form("vit-d3", "liquid"), Ok(true));
        assert_eq!(
            store.set_form("vit-d3", "powder"),
            Err(FormulaError::InvalidForm {
                id: "vit-d3".to_string(),
                form: "powder".to_string(),
            })
        );
        assert_eq!(store.get("vit-d3").unwrap().form(), "liquid");
    }

    #[test]
    fn list_preserves_insertion_order_and_is_restartable() {
        let mut store = SelectionStore::new();
        for id in ["zinc", "iron", "calcium"] {
            store.add(&ingredient(id, 100.0, 0.1), None);
        }
        store.remove("iron");
        store.add(&ingredient("iron", 100.0, 0.1), None);

        let first: Vec<_> = store.iter().map(|e| e.id()).collect();
        let second: Vec<_> = store.list().iter().map(|e| e.id()).collect();
        assert_eq!(first, vec!["zinc", "calcium", "iron"]);
        assert_eq!(first, second);
    }

    #[test]
    fn add_many_counts_only_new_entries() {
        let zinc = ingredient("zinc", 40.0, 0.12);
        let iron = ingredient("iron", 45.0, 0.18);
        let mut store = SelectionStore::new();
        store.add(&zinc, None);
        assert_eq!(store.add_many([&zinc, &iron], Some(Demographic::Women)), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn slider_range_follows_max() {
        let range = DosageRange::for_max(4000.0);
        assert_eq!(range, DosageRange { min: 400.0, max: 4000.0, step: 200.0 });
    }

    fn pool() -> Vec<Arc<CatalogIngredient>> {
        (0..6)
            .map(|i| ingredient(&format!("ing-{i}"), 100.0 * (i as f64 + 1.0), 0.1))
            .collect()
    }

    proptest! {
        #[test]
        fn never_holds_duplicate_ids(picks in proptest::collection::vec(0usize..6, 0..40)) {
            let pool = pool();
            let mut store = SelectionStore::new();
            for i in picks {
                store.add(&pool[i], None);
            }
            let mut ids: Vec<_> = store.iter().map(|e| e.id().to_string()).collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
        }

        #[test]
        fn remove_then_add_restores_defaults(
            picks in proptest::collection::vec(0usize..6, 1..6),
            target in 0usize..6,
            men in any::<bool>(),
        ) {
            let pool = pool();
            let demographic = Some(if men { Demographic::Men } else { Demographic::Women });
            let mut store = SelectionStore::new();
            store.add_many(picks.iter().map(|&i| &pool[i]), demographic);
            store.add(&pool[target], demographic);

            let before = store.get(pool[target].id.as_str()).cloned();
            store.remove(&pool[target].id);
            store.add(&pool[target], demographic);
            let after = store.get(pool[target].id.as_str()).cloned();

            prop_assert_eq!(before, after);
        }
    }
}
