//! # Health Profile Service Module
//!
//! Reads and replaces the single health profile. The builder uses it to seed
//! the demographic and the delivery form of new drafts.
//!
//! ## Sub-modules:
//! - `get`: the stored profile, or an empty one.
//! - `update`: validates and stores a new profile.

mod get;
mod update;

use crate::storage::StorageError;
use actix_web::web::{get, put, scope};
use actix_web::{HttpResponse, Scope};
use log::warn;

const API_PATH: &str = "/api/health/profile";

/// *   **`GET`**: `get::process`. Answers `200 OK` with a `HealthProfile`.
/// *   **`PUT`**: `update::process`. Expects a JSON `HealthProfile`; answers
///     `200 OK` with the stored profile or `400 Bad Request`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", put().to(update::process))
}

fn storage_error_response(e: StorageError) -> HttpResponse {
    warn!("Profile storage failed: {}", e);
    HttpResponse::ServiceUnavailable().body(format!("Error accessing the health profile: {}", e))
}
