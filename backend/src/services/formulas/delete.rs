use super::storage_error_response;
use crate::storage::FormulaRepository;
use actix_web::{web, HttpResponse, Responder};
use log::info;

/// Actix web handler for `DELETE /api/formulas/{id}`.
pub async fn process(id: web::Path<String>, repo: web::Data<dyn FormulaRepository>) -> impl Responder {
    match repo.delete(&id).await {
        Ok(()) => {
            info!("Deleted formula {}", id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => storage_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::formulas::configure_routes;
    use crate::services::formulas::tests::empty_repository;
    use crate::storage::tests::sample_record;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn deletes_once() {
        let repo = empty_repository();
        let stored = repo.insert(sample_record("Short-lived")).await.unwrap();
        let app = test::init_service(App::new().app_data(repo).service(configure_routes())).await;
        let uri = format!("/api/formulas/{}", stored.id);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri(&uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
