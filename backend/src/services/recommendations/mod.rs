//! # Recommendation Service Module
//!
//! Suggests catalog ingredients for a free-text health goal. Suggestions come
//! from a static keyword table; there is no model behind them.

mod suggest;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/recommendations";

/// `POST /api/recommendations` with a `RecommendationRequest` body.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(suggest::process))
}
