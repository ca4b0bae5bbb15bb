use super::storage_error_response;
use crate::storage::ProfileRepository;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /api/health/profile`.
///
/// An empty `HealthProfile` is returned until one has been saved.
pub async fn process(repo: web::Data<dyn ProfileRepository>) -> impl Responder {
    match repo.load().await {
        Ok(profile) => HttpResponse::Ok().json(profile.unwrap_or_default()),
        Err(e) => storage_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::profile::configure_routes;
    use crate::services::profile::tests::empty_profiles;
    use actix_web::{test, App};
    use common::model::catalog::Demographic;
    use common::model::profile::HealthProfile;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn empty_until_saved() {
        let repo = empty_profiles();
        let app = test::init_service(App::new().app_data(repo.clone()).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/health/profile").to_request();
        let profile: HealthProfile = test::call_and_read_body_json(&app, req).await;
        assert_eq!(profile, HealthProfile::default());

        let saved = HealthProfile {
            gender: Some(Demographic::Women),
            ..Default::default()
        };
        repo.save(saved.clone()).await.unwrap();
        let req = test::TestRequest::get().uri("/api/health/profile").to_request();
        let profile: HealthProfile = test::call_and_read_body_json(&app, req).await;
        assert_eq!(profile, saved);
    }
}
