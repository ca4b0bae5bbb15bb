use super::storage_error_response;
use crate::storage::FormulaRepository;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/formulas/{id}`.
///
/// # Returns
/// - `200 OK` with the `StoredFormula` as JSON.
/// - `404 Not Found` if no formula is stored under `id`.
pub async fn process(id: web::Path<String>, repo: web::Data<dyn FormulaRepository>) -> impl Responder {
    match repo.get(&id).await {
        Ok(formula) => HttpResponse::Ok().json(formula),
        Err(e) => storage_error_response(e),
    }
}
