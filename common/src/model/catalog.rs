use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable ingredient as published by the catalog source.
///
/// Catalog entries are immutable once loaded. Selections made by the user hold a
/// shared reference to the entry rather than a copy, so the catalog's bounds and
/// prices are always the ones used for banding and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIngredient {
    /// Unique key across the catalog (e.g. `"vit-d3"`).
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit the dosage is expressed in (`"mg"`, `"mcg"`, `"IU"`, `"billion CFU"`...).
    pub unit: String,
    /// Upper bound of the safe range, in `unit`. Always greater than zero.
    pub max_dosage: f64,
    pub recommended_dose: RecommendedDose,
    pub category: Category,
    /// Free-text descriptors matched by catalog search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cost of one hundred units of dosage.
    pub price_per_hundred_units: f64,
    /// Deliverable forms, in preference order. The first one is the default.
    pub forms: Vec<String>,
    pub source: Source,
}

impl CatalogIngredient {
    /// The form a freshly added selection starts with.
    pub fn default_form(&self) -> Option<&str> {
        self.forms.first().map(String::as_str)
    }

    pub fn offers_form(&self, form: &str) -> bool {
        self.forms.iter().any(|f| f == form)
    }

    /// Suggested starting dosage.
    ///
    /// With a known demographic this is the catalog recommendation; otherwise half
    /// of the maximum, rounded to a whole unit. Tiny maxima where rounding would
    /// produce zero keep the unrounded half so the dosage stays positive.
    pub fn initial_dosage(&self, demographic: Option<Demographic>) -> f64 {
        match demographic {
            Some(d) => self.recommended_dose.for_demographic(d),
            None => {
                let half = self.max_dosage * 0.5;
                let rounded = half.round();
                if rounded > 0.0 {
                    rounded
                } else {
                    half
                }
            }
        }
    }

    /// Case-insensitive match against name, description and tags.
    pub fn matches(&self, term: &str) -> bool {
        self.matches_needle(&search_needle(term))
    }

    /// Like `matches`, for a needle already passed through `search_needle`.
    pub(crate) fn matches_needle(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

pub(crate) fn search_needle(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Recommended daily dosage per demographic, in the ingredient's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedDose {
    pub men: f64,
    pub women: f64,
}

impl RecommendedDose {
    pub fn for_demographic(&self, demographic: Demographic) -> f64 {
        match demographic {
            Demographic::Men => self.men,
            Demographic::Women => self.women,
        }
    }
}

/// Demographic tag used only to seed recommended dosages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demographic {
    Men,
    Women,
}

impl Demographic {
    pub const ALL: [Demographic; 2] = [Demographic::Men, Demographic::Women];

    pub fn as_str(&self) -> &'static str {
        match self {
            Demographic::Men => "men",
            Demographic::Women => "women",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "men" | "male" => Some(Demographic::Men),
            "women" | "female" => Some(Demographic::Women),
            _ => None,
        }
    }
}

impl fmt::Display for Demographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Vitamins,
    Minerals,
    Proteins,
    Herbs,
    FattyAcids,
    Probiotics,
    Antioxidants,
    Performance,
    AminoAcids,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Vitamins,
        Category::Minerals,
        Category::Proteins,
        Category::Herbs,
        Category::FattyAcids,
        Category::Probiotics,
        Category::Antioxidants,
        Category::Performance,
        Category::AminoAcids,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vitamins => "vitamins",
            Category::Minerals => "minerals",
            Category::Proteins => "proteins",
            Category::Herbs => "herbs",
            Category::FattyAcids => "fatty-acids",
            Category::Probiotics => "probiotics",
            Category::Antioxidants => "antioxidants",
            Category::Performance => "performance",
            Category::AminoAcids => "amino-acids",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Provenance of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Animal,
    Plant,
    Synthetic,
    Mineral,
    Fermented,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Animal => "animal",
            Source::Plant => "plant",
            Source::Synthetic => "synthetic",
            Source::Mineral => "mineral",
            Source::Fermented => "fermented",
        }
    }
}
