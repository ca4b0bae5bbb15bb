//! # Catalog Service Module
//!
//! Read-only access to the ingredient catalog loaded at startup. The catalog is
//! shared with every worker as `web::Data<Catalog>`.
//!
//! ## Sub-modules:
//! - `list`: the full catalog, optionally filtered by search term and category.
//! - `get`: a single ingredient by id.
//! - `stacks`: the popular stacks for a demographic.

mod get;
mod list;
mod stacks;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all catalog-related API endpoints.
const API_PATH: &str = "/api/catalog";

/// Configures and returns the Actix `Scope` for all catalog-related routes.
///
/// # Registered Routes:
///
/// *   **`GET ?q=&category=`**: `list::process`. Every ingredient matching the
///     optional search term and category, in catalog order.
/// *   **`GET /stacks/{demographic}`**: `stacks::process`. Registered before
///     `/{id}` so `stacks` is never taken for an ingredient id.
/// *   **`GET /{id}`**: `get::process`. One ingredient, or `404 Not Found`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/stacks/{demographic}", get().to(stacks::process))
        .route("/{id}", get().to(get::process))
}
