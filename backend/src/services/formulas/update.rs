use super::{accept_record, storage_error_response};
use crate::storage::FormulaRepository;
use actix_web::{web, HttpResponse, Responder};
use common::catalog::Catalog;
use common::model::formula::FormulaRecord;
use log::info;

/// Actix web handler for `PUT /api/formulas/{id}`.
///
/// Replaces the whole record; the id is kept and `updated_at` is refreshed.
/// The record goes through the same checks and price recomputation as
/// `POST /api/formulas`.
pub async fn process(
    id: web::Path<String>,
    record: web::Json<FormulaRecord>,
    catalog: web::Data<Catalog>,
    repo: web::Data<dyn FormulaRepository>,
) -> impl Responder {
    let record = match accept_record(record.into_inner(), &catalog) {
        Ok(record) => record,
        Err(response) => return response,
    };

    match repo.update(&id, record).await {
        Ok(stored) => {
            info!("Updated formula {}", stored.id);
            HttpResponse::Ok().json(stored)
        }
        Err(e) => storage_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::formulas::configure_routes;
    use crate::services::formulas::tests::{builtin_catalog, empty_repository};
    use crate::storage::tests::sample_record;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::formula::{PackagingOption, StoredFormula};
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn replaces_the_record() {
        let repo = empty_repository();
        let original = repo.insert(sample_record("Draft")).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(builtin_catalog())
                .app_data(repo)
                .service(configure_routes()),
        )
        .await;

        let mut changed = sample_record("Final");
        changed.packaging = PackagingOption::GlassJar;
        let req = test::TestRequest::put()
            .uri(&format!("/api/formulas/{}", original.id))
            .set_json(&changed)
            .to_request();
        let stored: StoredFormula = test::call_and_read_body_json(&app, req).await;

        // the glass jar surcharge is added server-side
        changed.total_cost = 5.3;
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.record, changed);
        assert!(stored.updated_at >= original.updated_at);
    }

    #[actix_web::test]
    async fn missing_or_invalid() {
        let repo = empty_repository();
        let original = repo.insert(sample_record("Draft")).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(builtin_catalog())
                .app_data(repo)
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/formulas/missing")
            .set_json(sample_record("Whatever"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let mut empty = sample_record("Empty");
        empty.ingredients.clear();
        let req = test::TestRequest::put()
            .uri(&format!("/api/formulas/{}", original.id))
            .set_json(empty)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let mut unknown = sample_record("Unknown");
        unknown.ingredients[0].id = "unobtainium".to_string();
        let req = test::TestRequest::put()
            .uri(&format!("/api/formulas/{}", original.id))
            .set_json(unknown)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}
