//! Presentation lookup for categories and sources.
//!
//! Every screen that shows a category badge or a source tag reads from these
//! tables instead of matching on the category itself.

use crate::model::catalog::{Category, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub category: Category,
    pub label: &'static str,
    pub icon: &'static str,
    /// CSS class pair applied to the badge.
    pub color: &'static str,
}

const CATEGORY_STYLES: [CategoryStyle; 9] = [
    CategoryStyle { category: Category::Vitamins, label: "Vitamins", icon: "💊", color: "bg-orange-100 text-orange-700" },
    CategoryStyle { category: Category::Minerals, label: "Minerals", icon: "⛰️", color: "bg-stone-100 text-stone-700" },
    CategoryStyle { category: Category::Proteins, label: "Proteins", icon: "🥛", color: "bg-blue-100 text-blue-700" },
    CategoryStyle { category: Category::Herbs, label: "Herbs", icon: "🌿", color: "bg-green-100 text-green-700" },
    CategoryStyle { category: Category::FattyAcids, label: "Omega", icon: "🐟", color: "bg-cyan-100 text-cyan-700" },
    CategoryStyle { category: Category::Probiotics, label: "Probiotics", icon: "🦠", color: "bg-purple-100 text-purple-700" },
    CategoryStyle { category: Category::Antioxidants, label: "Antioxidants", icon: "🍇", color: "bg-pink-100 text-pink-700" },
    CategoryStyle { category: Category::Performance, label: "Performance", icon: "⚡", color: "bg-yellow-100 text-yellow-700" },
    CategoryStyle { category: Category::AminoAcids, label: "Amino Acids", icon: "🧬", color: "bg-red-100 text-red-700" },
];

impl Category {
    pub fn style(&self) -> &'static CategoryStyle {
        // The table is ordered like `Category::ALL`, one row per variant.
        &CATEGORY_STYLES[*self as usize]
    }
}

impl Source {
    pub fn badge_color(&self) -> &'static str {
        match self {
            Source::Animal => "bg-red-50 text-red-700",
            Source::Plant => "bg-green-50 text-green-700",
            Source::Synthetic | Source::Mineral | Source::Fermented => "bg-blue-50 text-blue-700",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_row_matches_its_category() {
        for category in Category::ALL {
            assert_eq!(category.style().category, category);
        }
    }
}
