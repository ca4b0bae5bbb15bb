//! Curated starting points: popular stacks per demographic and the health goal
//! list shown before the user starts building.

use crate::model::catalog::Demographic;
use serde::{Deserialize, Serialize};

/// A named bundle of catalog ids the user can add in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularStack {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredient_ids: Vec<String>,
    /// Advertised monthly price of the pre-built stack.
    pub price: f64,
    pub popular: bool,
}

fn stack(id: &str, name: &str, description: &str, ids: &[&str], price: f64, popular: bool) -> PopularStack {
    PopularStack {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        ingredient_ids: ids.iter().map(|i| i.to_string()).collect(),
        price,
        popular,
    }
}

pub fn popular_stacks(demographic: Demographic) -> Vec<PopularStack> {
    match demographic {
        Demographic::Men => vec![
            stack(
                "men-performance",
                "Men's Performance Stack",
                "Boost energy, strength, and testosterone naturally",
                &["creatine", "ashwagandha", "zinc", "vit-d3", "omega-3"],
                45.0,
                true,
            ),
            stack(
                "men-focus",
                "Men's Focus & Energy",
                "Enhanced cognitive performance and sustained energy",
                &["rhodiola", "vit-b12", "omega-3", "coq10"],
                38.0,
                false,
            ),
            stack(
                "men-recovery",
                "Men's Recovery Formula",
                "Optimize muscle recovery and sleep quality",
                &["magnesium", "whey-protein", "turmeric", "ashwagandha"],
                42.0,
                false,
            ),
        ],
        Demographic::Women => vec![
            stack(
                "women-glow",
                "Women's Glow Stack",
                "Radiant skin, strong hair, and healthy nails",
                &["collagen", "vit-c", "vit-e", "vit-b7", "omega-3"],
                48.0,
                true,
            ),
            stack(
                "women-energy",
                "Women's Energy & Vitality",
                "Combat fatigue and support hormonal balance",
                &["iron", "vit-b12", "vit-d3", "ashwagandha", "rhodiola"],
                44.0,
                false,
            ),
            stack(
                "women-wellness",
                "Women's Daily Wellness",
                "Complete nutritional support for active women",
                &["vit-b9", "calcium", "iron", "omega-3", "probiotics"],
                40.0,
                false,
            ),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthGoal {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const HEALTH_GOALS: [HealthGoal; 10] = [
    HealthGoal { id: "energy", name: "Energy & Vitality", icon: "⚡" },
    HealthGoal { id: "muscle", name: "Muscle & Strength", icon: "💪" },
    HealthGoal { id: "beauty", name: "Beauty & Anti-Aging", icon: "✨" },
    HealthGoal { id: "brain", name: "Brain & Focus", icon: "🧠" },
    HealthGoal { id: "sleep", name: "Sleep & Recovery", icon: "🌙" },
    HealthGoal { id: "immunity", name: "Immune Support", icon: "🛡️" },
    HealthGoal { id: "heart", name: "Heart Health", icon: "❤️" },
    HealthGoal { id: "gut", name: "Digestive Health", icon: "🌿" },
    HealthGoal { id: "bone", name: "Bone Health", icon: "🦴" },
    HealthGoal { id: "weight", name: "Weight Management", icon: "⚖️" },
];

pub fn health_goal(id: &str) -> Option<&'static HealthGoal> {
    HEALTH_GOALS.iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn every_stack_references_known_ingredients() {
        let catalog = Catalog::builtin().unwrap();
        for demographic in Demographic::ALL {
            for stack in popular_stacks(demographic) {
                for id in &stack.ingredient_ids {
                    assert!(catalog.get(id).is_some(), "{} references unknown '{}'", stack.id, id);
                }
            }
        }
    }

    #[test]
    fn looks_up_goals_by_id() {
        assert_eq!(health_goal("sleep").map(|g| g.name), Some("Sleep & Recovery"));
        assert!(health_goal("telekinesis").is_none());
    }
}
