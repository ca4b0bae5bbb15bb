use super::storage_error_response;
use crate::storage::ProfileRepository;
use actix_web::{web, HttpResponse, Responder};
use common::model::profile::HealthProfile;
use log::{info, warn};

/// Actix web handler for `PUT /api/health/profile`.
///
/// # Returns
/// - `200 OK` with the profile as stored: duplicate goals dropped, allergies
///   trimmed.
/// - `400 Bad Request` for unknown goal ids, more than four goals or blank
///   allergies.
/// - `503 Service Unavailable` if storage fails.
pub async fn process(profile: web::Json<HealthProfile>, repo: web::Data<dyn ProfileRepository>) -> impl Responder {
    let profile = match profile.normalized() {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Rejected health profile: {}", e);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    match repo.save(profile).await {
        Ok(stored) => {
            info!("Health profile updated");
            HttpResponse::Ok().json(stored)
        }
        Err(e) => storage_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::services::profile::configure_routes;
    use crate::services::profile::tests::empty_profiles;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::formula::DeliveryForm;
    use common::model::profile::HealthProfile;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn stores_the_normalized_profile() {
        let repo = empty_profiles();
        let app = test::init_service(App::new().app_data(repo.clone()).service(configure_routes())).await;

        let profile = HealthProfile {
            preferred_form: Some(DeliveryForm::Gummy),
            health_goals: vec!["sleep".to_string(), "sleep".to_string()],
            allergies: vec![" shellfish ".to_string()],
            ..Default::default()
        };
        let req = test::TestRequest::put()
            .uri("/api/health/profile")
            .set_json(&profile)
            .to_request();
        let stored: HealthProfile = test::call_and_read_body_json(&app, req).await;

        assert_eq!(stored.health_goals, vec!["sleep"]);
        assert_eq!(stored.allergies, vec!["shellfish"]);
        assert_eq!(repo.load().await.unwrap(), Some(stored));
    }

    #[actix_web::test]
    async fn unknown_goal_is_a_bad_request() {
        let repo = empty_profiles();
        let app = test::init_service(App::new().app_data(repo.clone()).service(configure_routes())).await;

        let profile = HealthProfile {
            health_goals: vec!["time-travel".to_string()],
            ..Default::default()
        };
        let req = test::TestRequest::put()
            .uri("/api/health/profile")
            .set_json(&profile)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.load().await.unwrap(), None);
    }
}
