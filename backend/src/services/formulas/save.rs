use super::{accept_record, storage_error_response};
use crate::storage::FormulaRepository;
use actix_web::{web, HttpResponse, Responder};
use common::catalog::Catalog;
use common::model::formula::FormulaRecord;
use common::requests::SaveFormulaResponse;
use log::info;

/// Actix web handler for `POST /api/formulas`.
///
/// # Returns
/// - `201 Created` with `SaveFormulaResponse` carrying the new id. The stored
///   costs and serving are recomputed from the catalog.
/// - `400 Bad Request` if the record has no ingredients, an unusable name, a
///   non-positive dosage, a repeated or unknown ingredient, or a form the
///   ingredient does not come in.
/// - `503 Service Unavailable` if storage fails.
pub async fn process(
    record: web::Json<FormulaRecord>,
    catalog: web::Data<Catalog>,
    repo: web::Data<dyn FormulaRepository>,
) -> impl Responder {
    let record = match accept_record(record.into_inner(), &catalog) {
        Ok(record) => record,
        Err(response) => return response,
    };

    match repo.insert(record).await {
        Ok(stored) => {
            info!("Stored formula '{}' as {}", stored.record.name, stored.id);
            HttpResponse::Created().json(SaveFormulaResponse { id: stored.id })
        }
        Err(e) => storage_error_response(e),
    }
}
