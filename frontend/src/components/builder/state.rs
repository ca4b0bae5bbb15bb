//! Component state for the formula builder.
//!
//! The builder logic itself lives in `common::builder::BuilderSession`; this
//! struct only adds what the screen needs around it: the loaded catalog, the
//! catalog filters and the results of backend lookups.

use common::builder::BuilderSession;
use common::catalog::stacks::PopularStack;
use common::catalog::Catalog;
use common::model::catalog::{CatalogIngredient, Category};
use common::model::profile::HealthProfile;
use std::sync::Arc;

pub struct FormulaBuilder {
    pub session: BuilderSession,

    /// `None` until `/api/catalog` answers.
    pub catalog: Option<Catalog>,

    /// Free-text filter applied to the catalog list.
    pub search: String,

    pub category: Option<Category>,

    /// Popular stacks for the current demographic.
    pub stacks: Vec<PopularStack>,

    /// Text typed into the custom goal field.
    pub goal_text: String,

    /// Catalog ids suggested for the chosen goal.
    pub recommended: Vec<String>,

    /// Last profile read from or written to `/api/health/profile`.
    pub profile: HealthProfile,

    /// Guard to run the first-render fetches once.
    pub loaded: bool,
}

impl FormulaBuilder {
    pub fn new() -> Self {
        Self {
            session: BuilderSession::new(),
            catalog: None,
            search: String::new(),
            category: None,
            stacks: Vec::new(),
            goal_text: String::new(),
            recommended: Vec::new(),
            profile: HealthProfile::default(),
            loaded: false,
        }
    }

    /// Catalog entries matching the current search term and category filter.
    pub fn visible_ingredients(&self) -> Vec<&Arc<CatalogIngredient>> {
        match &self.catalog {
            Some(catalog) => catalog
                .search(&self.search)
                .filter(|i| self.category.is_none_or(|c| i.category == c))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.session
            .draft()
            .is_some_and(|draft| draft.selection.contains(id))
    }
}
