//! Built-in reference catalog.

use crate::model::catalog::{CatalogIngredient, Category, RecommendedDose, Source};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    (max_dosage, unit): (f64, &str),
    category: Category,
    tags: &[&str],
    price_per_hundred_units: f64,
    forms: &[&str],
    (men, women): (f64, f64),
    source: Source,
) -> CatalogIngredient {
    CatalogIngredient {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        unit: unit.to_string(),
        max_dosage,
        recommended_dose: RecommendedDose { men, women },
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        price_per_hundred_units,
        forms: forms.iter().map(|f| f.to_string()).collect(),
        source,
    }
}

pub(super) fn builtin_ingredients() -> Vec<CatalogIngredient> {
    vec![
        entry(
            "vit-a",
            "Vitamin A (Retinol)",
            "Essential for vision, immune function, and skin health",
            (3000.0, "mcg"),
            Category::Vitamins,
            &["vision", "immunity", "skin"],
            0.12,
            &["capsule", "powder", "liquid", "gummy"],
            (900.0, 700.0),
            Source::Animal,
        ),
        entry(
            "vit-b1",
            "Thiamine (Vitamin B1)",
            "Supports energy metabolism and nervous system function",
            (100.0, "mg"),
            Category::Vitamins,
            &["energy", "nervous-system", "metabolism"],
            0.08,
            &["capsule", "powder", "liquid"],
            (1.2, 1.1),
            Source::Synthetic,
        ),
        entry(
            "vit-b2",
            "Riboflavin (Vitamin B2)",
            "Important for energy production and cellular function",
            (400.0, "mg"),
            Category::Vitamins,
            &["energy", "cellular", "metabolism"],
            0.09,
            &["capsule", "powder", "liquid"],
            (1.3, 1.1),
            Source::Synthetic,
        ),
        entry(
            "vit-b3",
            "Niacin (Vitamin B3)",
            "Supports cardiovascular health and energy metabolism",
            (35.0, "mg"),
            Category::Vitamins,
            &["heart", "energy", "cholesterol"],
            0.07,
            &["capsule", "powder", "liquid"],
            (16.0, 14.0),
            Source::Synthetic,
        ),
        entry(
            "vit-b5",
            "Pantothenic Acid (Vitamin B5)",
            "Essential for hormone production and energy metabolism",
            (1000.0, "mg"),
            Category::Vitamins,
            &["hormones", "energy", "stress"],
            0.11,
            &["capsule", "powder", "liquid"],
            (5.0, 5.0),
            Source::Synthetic,
        ),
        entry(
            "vit-b6",
            "Pyridoxine (Vitamin B6)",
            "Important for brain development and immune function",
            (100.0, "mg"),
            Category::Vitamins,
            &["brain", "immunity", "mood"],
            0.1,
            &["capsule", "powder", "liquid"],
            (1.3, 1.3),
            Source::Synthetic,
        ),
        entry(
            "vit-b7",
            "Biotin (Vitamin B7)",
            "Essential for hair, skin, nail health and metabolism",
            (10000.0, "mcg"),
            Category::Vitamins,
            &["hair", "skin", "nails", "metabolism"],
            0.08,
            &["capsule", "powder", "gummy", "liquid"],
            (30.0, 30.0),
            Source::Synthetic,
        ),
        entry(
            "vit-b9",
            "Folate (Vitamin B9)",
            "Critical for DNA synthesis and red blood cell formation",
            (1000.0, "mcg"),
            Category::Vitamins,
            &["pregnancy", "blood", "dna"],
            0.09,
            &["capsule", "powder", "liquid"],
            (400.0, 400.0),
            Source::Synthetic,
        ),
        entry(
            "vit-b12",
            "Cobalamin (Vitamin B12)",
            "Essential for nerve function and red blood cell formation",
            (2000.0, "mcg"),
            Category::Vitamins,
            &["energy", "nerves", "blood"],
            0.15,
            &["capsule", "powder", "liquid", "sublingual"],
            (2.4, 2.4),
            Source::Animal,
        ),
        entry(
            "vit-c",
            "Vitamin C (Ascorbic Acid)",
            "Powerful antioxidant supporting immune system and collagen",
            (2000.0, "mg"),
            Category::Vitamins,
            &["immunity", "antioxidant", "collagen"],
            0.06,
            &["capsule", "powder", "liquid", "gummy", "chewable"],
            (90.0, 75.0),
            Source::Synthetic,
        ),
        entry(
            "vit-d3",
            "Vitamin D3 (Cholecalciferol)",
            "Essential for bone health, immunity, and mood",
            (4000.0, "IU"),
            Category::Vitamins,
            &["bone", "immunity", "mood"],
            0.05,
            &["capsule", "liquid", "gummy"],
            (600.0, 600.0),
            Source::Animal,
        ),
        entry(
            "vit-e",
            "Vitamin E (Tocopherol)",
            "Antioxidant protecting cells from oxidative damage",
            (1000.0, "mg"),
            Category::Vitamins,
            &["antioxidant", "skin", "heart"],
            0.13,
            &["capsule", "liquid"],
            (15.0, 15.0),
            Source::Plant,
        ),
        entry(
            "vit-k2",
            "Vitamin K2 (Menaquinone)",
            "Important for bone health and cardiovascular function",
            (180.0, "mcg"),
            Category::Vitamins,
            &["bone", "heart", "calcium"],
            0.25,
            &["capsule", "liquid"],
            (120.0, 90.0),
            Source::Animal,
        ),
        entry(
            "calcium",
            "Calcium Carbonate",
            "Essential for bone and teeth health, muscle function",
            (2500.0, "mg"),
            Category::Minerals,
            &["bone", "teeth", "muscle"],
            0.04,
            &["capsule", "powder", "chewable"],
            (1000.0, 1200.0),
            Source::Mineral,
        ),
        entry(
            "magnesium",
            "Magnesium Glycinate",
            "Highly bioavailable magnesium for relaxation and sleep",
            (400.0, "mg"),
            Category::Minerals,
            &["sleep", "relaxation", "muscle"],
            0.15,
            &["capsule", "powder"],
            (400.0, 310.0),
            Source::Mineral,
        ),
        entry(
            "iron",
            "Iron Bisglycinate",
            "Gentle iron for energy and red blood cell formation",
            (45.0, "mg"),
            Category::Minerals,
            &["energy", "blood", "fatigue"],
            0.18,
            &["capsule", "liquid"],
            (8.0, 18.0),
            Source::Mineral,
        ),
        entry(
            "zinc",
            "Zinc Picolinate",
            "Essential for immune function and wound healing",
            (40.0, "mg"),
            Category::Minerals,
            &["immunity", "healing", "testosterone"],
            0.12,
            &["capsule", "powder", "liquid"],
            (11.0, 8.0),
            Source::Mineral,
        ),
        entry(
            "selenium",
            "Selenium Methionine",
            "Antioxidant mineral supporting thyroid function",
            (400.0, "mcg"),
            Category::Minerals,
            &["antioxidant", "thyroid", "immunity"],
            0.2,
            &["capsule", "powder"],
            (55.0, 55.0),
            Source::Mineral,
        ),
        entry(
            "iodine",
            "Potassium Iodide",
            "Essential for thyroid hormone production",
            (1100.0, "mcg"),
            Category::Minerals,
            &["thyroid", "metabolism", "energy"],
            0.08,
            &["capsule", "liquid"],
            (150.0, 150.0),
            Source::Mineral,
        ),
        entry(
            "chromium",
            "Chromium Picolinate",
            "Supports glucose metabolism and insulin function",
            (200.0, "mcg"),
            Category::Minerals,
            &["glucose", "insulin", "metabolism"],
            0.14,
            &["capsule", "powder"],
            (35.0, 25.0),
            Source::Mineral,
        ),
        entry(
            "whey-protein",
            "Whey Protein Isolate",
            "Complete protein for muscle building and recovery",
            (50000.0, "mg"),
            Category::Proteins,
            &["muscle", "recovery", "protein"],
            0.02,
            &["powder"],
            (25000.0, 20000.0),
            Source::Animal,
        ),
        entry(
            "collagen",
            "Hydrolyzed Collagen",
            "Supports skin, hair, nails, and joint health",
            (20000.0, "mg"),
            Category::Proteins,
            &["skin", "hair", "joints", "anti-aging"],
            0.03,
            &["powder", "capsule"],
            (10000.0, 10000.0),
            Source::Animal,
        ),
        entry(
            "creatine",
            "Creatine Monohydrate",
            "Supports muscle strength and cognitive function",
            (5000.0, "mg"),
            Category::Performance,
            &["muscle", "strength", "brain"],
            0.1,
            &["powder", "capsule"],
            (5000.0, 3000.0),
            Source::Synthetic,
        ),
        entry(
            "l-carnitine",
            "L-Carnitine",
            "Supports fat metabolism and energy production",
            (3000.0, "mg"),
            Category::AminoAcids,
            &["fat-burning", "energy", "metabolism"],
            0.16,
            &["capsule", "powder", "liquid"],
            (2000.0, 1500.0),
            Source::Synthetic,
        ),
        entry(
            "ashwagandha",
            "Ashwagandha Extract",
            "Adaptogenic herb for stress management and focus",
            (600.0, "mg"),
            Category::Herbs,
            &["stress", "focus", "adaptogen", "testosterone"],
            0.25,
            &["capsule", "powder"],
            (500.0, 400.0),
            Source::Plant,
        ),
        entry(
            "rhodiola",
            "Rhodiola Rosea",
            "Adaptogen for mental performance and fatigue resistance",
            (600.0, "mg"),
            Category::Herbs,
            &["mental-performance", "fatigue", "adaptogen"],
            0.3,
            &["capsule", "powder"],
            (400.0, 300.0),
            Source::Plant,
        ),
        entry(
            "turmeric",
            "Turmeric Curcumin",
            "Powerful anti-inflammatory and antioxidant compound",
            (1000.0, "mg"),
            Category::Herbs,
            &["inflammation", "antioxidant", "joints"],
            0.18,
            &["capsule", "powder"],
            (500.0, 500.0),
            Source::Plant,
        ),
        entry(
            "omega-3",
            "Omega-3 EPA/DHA",
            "Essential fatty acids for brain and heart health",
            (3000.0, "mg"),
            Category::FattyAcids,
            &["brain", "heart", "inflammation"],
            0.3,
            &["capsule", "liquid"],
            (1600.0, 1100.0),
            Source::Animal,
        ),
        entry(
            "omega-3-vegan",
            "Algae Omega-3",
            "Plant-based EPA/DHA from algae",
            (2000.0, "mg"),
            Category::FattyAcids,
            &["brain", "heart", "vegan"],
            0.45,
            &["capsule", "liquid"],
            (1600.0, 1100.0),
            Source::Plant,
        ),
        entry(
            "probiotics",
            "Multi-Strain Probiotics",
            "Beneficial bacteria for digestive and immune health",
            (100.0, "billion CFU"),
            Category::Probiotics,
            &["gut-health", "immunity", "digestion"],
            0.4,
            &["capsule", "powder"],
            (50.0, 50.0),
            Source::Fermented,
        ),
        entry(
            "coq10",
            "Coenzyme Q10",
            "Supports cellular energy production and heart health",
            (300.0, "mg"),
            Category::Antioxidants,
            &["energy", "heart", "antioxidant"],
            0.5,
            &["capsule", "liquid"],
            (100.0, 100.0),
            Source::Synthetic,
        ),
        entry(
            "resveratrol",
            "Trans-Resveratrol",
            "Antioxidant compound supporting longevity and heart health",
            (500.0, "mg"),
            Category::Antioxidants,
            &["longevity", "heart", "antioxidant"],
            0.6,
            &["capsule", "powder"],
            (250.0, 250.0),
            Source::Plant,
        ),
    ]
}
