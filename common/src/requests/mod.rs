use serde::{Deserialize, Serialize};

/// Body of `POST /api/recommendations`: a free-text goal such as
/// "I want more energy".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub goal: String,
}

/// Query string accepted by `GET /api/catalog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Search term matched against name, description and tags.
    pub q: Option<String>,
    /// Category wire name, e.g. `fatty-acids`.
    pub category: Option<String>,
}

/// Response of `POST /api/formulas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFormulaResponse {
    pub id: String,
}
