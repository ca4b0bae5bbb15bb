use actix_web::{web, HttpResponse, Responder};
use common::catalog::stacks::popular_stacks;
use common::model::catalog::Demographic;

/// Actix web handler for `GET /api/catalog/stacks/{demographic}`.
///
/// Accepts `men`/`male` and `women`/`female`; anything else is a
/// `400 Bad Request`.
pub async fn process(demographic: web::Path<String>) -> impl Responder {
    match Demographic::parse(&demographic) {
        Some(d) => HttpResponse::Ok().json(popular_stacks(d)),
        None => HttpResponse::BadRequest().body(format!("Unknown demographic '{}'", demographic)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::catalog::stacks::PopularStack;
    use common::catalog::Catalog;

    #[actix_web::test]
    async fn stacks_per_demographic() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Catalog::builtin().unwrap()))
                .service(crate::services::catalog::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/catalog/stacks/women").to_request();
        let stacks: Vec<PopularStack> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stacks, popular_stacks(Demographic::Women));

        let req = test::TestRequest::get().uri("/api/catalog/stacks/kids").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
