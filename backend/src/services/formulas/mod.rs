//! # Formula Service Module
//!
//! CRUD endpoints for saved formulas under `/api/formulas`. Handlers validate
//! incoming records against the catalog with the same rules the builder
//! applies when assembling them, recompute the prices, then delegate to the
//! injected `FormulaRepository`.
//!
//! ## Sub-modules:
//! - `save`: stores a new formula and returns its id.
//! - `list`: every stored formula, oldest first.
//! - `get`: one stored formula.
//! - `update`: replaces the record stored under an id.
//! - `delete`: removes a stored formula.

mod delete;
mod get;
mod list;
mod save;
mod update;

use crate::storage::StorageError;
use actix_web::web::{delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use common::builder::reconcile;
use common::catalog::Catalog;
use common::model::formula::FormulaRecord;
use log::warn;

/// The base path for all formula-related API endpoints.
const API_PATH: &str = "/api/formulas";

/// Configures and returns the Actix `Scope` for all formula-related routes.
///
/// # Registered Routes:
///
/// *   **`POST`**: `save::process`. Expects a JSON `FormulaRecord`; answers
///     `201 Created` with `{"id": ...}`.
/// *   **`GET`**: `list::process`.
/// *   **`GET /{id}`**: `get::process`.
/// *   **`PUT /{id}`**: `update::process`. Expects a JSON `FormulaRecord`.
/// *   **`DELETE /{id}`**: `delete::process`. Answers `204 No Content`.
///
/// Invalid records are rejected with `400 Bad Request`, unknown ids with
/// `404 Not Found` and storage failures with `503 Service Unavailable`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(save::process))
        .route("", get().to(list::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// Checks an incoming record against `catalog` and replaces its derived
/// figures with server-side ones.
fn accept_record(record: FormulaRecord, catalog: &Catalog) -> Result<FormulaRecord, HttpResponse> {
    match reconcile(record, catalog) {
        Ok(record) => Ok(record),
        Err(e) => {
            warn!("Rejected formula: {}", e);
            Err(HttpResponse::BadRequest().body(e.to_string()))
        }
    }
}

fn storage_error_response(e: StorageError) -> HttpResponse {
    match e {
        StorageError::NotFound(_) => HttpResponse::NotFound().body(e.to_string()),
        _ => {
            warn!("Formula storage failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error accessing formulas: {}", e))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::storage::{FormulaRepository, InMemoryFormulaRepository};
    use actix_web::web;
    use common::catalog::Catalog;
    use std::sync::Arc;

    pub(crate) fn empty_repository() -> web::Data<dyn FormulaRepository> {
        let repo: Arc<dyn FormulaRepository> = Arc::new(InMemoryFormulaRepository::new());
        web::Data::from(repo)
    }

    pub(crate) fn builtin_catalog() -> web::Data<Catalog> {
        web::Data::new(Catalog::builtin().unwrap())
    }
}
