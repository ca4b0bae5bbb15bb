use super::storage_error_response;
use crate::storage::FormulaRepository;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/formulas`.
pub async fn process(repo: web::Data<dyn FormulaRepository>) -> impl Responder {
    match repo.list().await {
        Ok(formulas) => HttpResponse::Ok().json(formulas),
        Err(e) => storage_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::formulas::configure_routes;
    use crate::services::formulas::tests::empty_repository;
    use crate::storage::tests::sample_record;
    use actix_web::{test, App};
    use common::model::formula::StoredFormula;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn lists_in_insertion_order() {
        let repo = empty_repository();
        repo.insert(sample_record("First")).await.unwrap();
        repo.insert(sample_record("Second")).await.unwrap();
        let app = test::init_service(App::new().app_data(repo).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/formulas").to_request();
        let all: Vec<StoredFormula> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<_> = all.into_iter().map(|f| f.record.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
