//! # Pricing Engine
//!
//! Derives the monthly price of a formula from its selection plus the
//! packaging and subscription choices. Cost is linear in dosage: every line
//! contributes `price_per_hundred_units * dosage / 100`. There are no volume
//! discounts and a single implicit currency (euro).
//!
//! Arithmetic stays in full-precision `f64`. Rounding to cents happens only at
//! the presentation boundary through `round_cents` and `format_price`.

use crate::builder::selection::{SelectedIngredient, SelectionStore};
use crate::model::formula::{PackagingOption, SubscriptionPlan};
use serde::{Deserialize, Serialize};

pub const CURRENCY_SYMBOL: &str = "€";

/// Cost of `dosage` units of an ingredient priced per hundred units.
pub fn line_cost(price_per_hundred_units: f64, dosage: f64) -> f64 {
    price_per_hundred_units * dosage / 100.0
}

/// Sum of the per-line costs. Independent of insertion order.
pub fn formula_cost<'a, I>(selection: I) -> f64
where
    I: IntoIterator<Item = &'a SelectedIngredient>,
{
    selection.into_iter().map(SelectedIngredient::cost).sum()
}

/// `cost + surcharge - cost * discount_percent / 100`.
pub fn final_price(formula_cost: f64, packaging_surcharge: f64, subscription_discount_percent: f64) -> f64 {
    formula_cost + packaging_surcharge - discount_amount(formula_cost, subscription_discount_percent)
}

fn discount_amount(formula_cost: f64, discount_percent: f64) -> f64 {
    formula_cost * discount_percent / 100.0
}

/// Every figure shown on the summary screen, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub formula_cost: f64,
    pub packaging_surcharge: f64,
    pub discount_amount: f64,
    pub final_price: f64,
}

impl PriceBreakdown {
    pub fn quote(selection: &SelectionStore, packaging: PackagingOption, subscription: SubscriptionPlan) -> Self {
        let cost = formula_cost(selection);
        let surcharge = packaging.surcharge();
        let percent = subscription.discount_percent();
        Self {
            formula_cost: cost,
            packaging_surcharge: surcharge,
            discount_amount: discount_amount(cost, percent),
            final_price: final_price(cost, surcharge, percent),
        }
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// `€9.59`.
pub fn format_price(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_cents(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::test_support::{ingredient, vit_d3};
    use crate::model::catalog::Demographic;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_line_contribution() {
        let mut store = SelectionStore::new();
        store.add(&vit_d3(), Some(Demographic::Men));
        store.set_dosage("vit-d3", 4200.0).unwrap();
        assert!(close(formula_cost(&store), 2.10));
    }

    #[test]
    fn two_lines_with_packaging_and_quarterly_discount() {
        let omega = ingredient("omega-3", 3000.0, 0.30);
        let mut store = SelectionStore::new();
        store.add(&vit_d3(), Some(Demographic::Men));
        store.add(&omega, None);
        store.set_dosage("omega-3", 1600.0).unwrap();

        let cost = formula_cost(&store);
        assert!(close(cost, 5.10));
        assert!(close(final_price(cost, 5.0, 10.0), 9.59));

        let quote = PriceBreakdown::quote(&store, PackagingOption::GlassJar, SubscriptionPlan::Quarterly);
        assert!(close(quote.discount_amount, 0.51));
        assert!(close(quote.final_price, 9.59));
        assert_eq!(format_price(quote.final_price), "€9.59");
    }

    #[test]
    fn empty_selection_costs_only_packaging() {
        let store = SelectionStore::new();
        let quote = PriceBreakdown::quote(&store, PackagingOption::TravelPack, SubscriptionPlan::OneTime);
        assert_eq!(quote.formula_cost, 0.0);
        assert_eq!(quote.final_price, 3.0);
    }

    #[test]
    fn rounds_only_for_display() {
        assert_eq!(round_cents(2.104999), 2.10);
        assert_eq!(format_price(0.0), "€0.00");
        assert_eq!(format_price(12.345678), "€12.35");
    }

    proptest! {
        #[test]
        fn cost_is_independent_of_insertion_order(
            doses in proptest::collection::vec(1.0f64..5000.0, 1..8),
            seed in any::<u64>(),
        ) {
            let pool: Vec<_> = doses
                .iter()
                .enumerate()
                .map(|(i, _)| ingredient(&format!("ing-{i}"), 5000.0, 0.01 * (i as f64 + 1.0)))
                .collect();

            let mut forward = SelectionStore::new();
            for (item, dose) in pool.iter().zip(&doses) {
                forward.add(item, None);
                forward.set_dosage(&item.id, *dose).unwrap();
            }

            let mut order: Vec<usize> = (0..pool.len()).collect();
            let len = order.len();
            order.rotate_left((seed as usize) % len);
            order.reverse();
            let mut shuffled = SelectionStore::new();
            for i in order {
                shuffled.add(&pool[i], None);
                shuffled.set_dosage(&pool[i].id, doses[i]).unwrap();
            }

            let a = formula_cost(&forward);
            let b = formula_cost(&shuffled);
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
        }
    }
}
