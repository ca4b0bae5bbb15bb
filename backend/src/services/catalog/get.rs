use actix_web::{web, HttpResponse, Responder};
use common::catalog::Catalog;

/// Actix web handler for `GET /api/catalog/{id}`.
pub async fn process(id: web::Path<String>, catalog: web::Data<Catalog>) -> impl Responder {
    match catalog.get(&id) {
        Some(ingredient) => HttpResponse::Ok().json(ingredient.as_ref()),
        None => HttpResponse::NotFound().body(format!("Ingredient '{}' not found", id)),
    }
}
