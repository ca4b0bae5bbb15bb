use actix_web::{web, HttpResponse, Responder};
use common::catalog::Catalog;
use common::model::catalog::{CatalogIngredient, Category};
use common::requests::CatalogQuery;
use log::warn;

/// Actix web handler for `GET /api/catalog`.
///
/// # Returns
/// - `200 OK` with a JSON array of `CatalogIngredient`.
/// - `400 Bad Request` if `category` is not a known category.
pub async fn process(query: web::Query<CatalogQuery>, catalog: web::Data<Catalog>) -> impl Responder {
    match list_ingredients(&catalog, &query) {
        Ok(ingredients) => HttpResponse::Ok().json(ingredients),
        Err(e) => {
            warn!("Rejected catalog query: {}", e);
            HttpResponse::BadRequest().body(e)
        }
    }
}

fn list_ingredients<'a>(catalog: &'a Catalog, query: &CatalogQuery) -> Result<Vec<&'a CatalogIngredient>, String> {
    let category = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(name) => Some(Category::parse(name).ok_or_else(|| format!("Unknown category '{}'", name))?),
        None => None,
    };
    let term = query.q.as_deref().unwrap_or("");

    Ok(catalog
        .search(term)
        .filter(|i| category.is_none_or(|c| i.category == c))
        .map(|i| i.as_ref())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use pretty_assertions::assert_eq;

    async fn get_ids(uri: &str) -> Vec<String> {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Catalog::builtin().unwrap()))
                .service(crate::services::catalog::configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Vec<CatalogIngredient> = test::call_and_read_body_json(&app, req).await;
        body.into_iter().map(|i| i.id).collect()
    }

    #[actix_web::test]
    async fn lists_the_whole_catalog() {
        assert_eq!(get_ids("/api/catalog").await.len(), 32);
    }

    #[actix_web::test]
    async fn filters_by_term_and_category() {
        assert_eq!(get_ids("/api/catalog?q=magnesium").await, vec!["magnesium"]);
        assert_eq!(
            get_ids("/api/catalog?category=fatty-acids").await,
            vec!["omega-3", "omega-3-vegan"]
        );
        assert_eq!(
            get_ids("/api/catalog?q=vegan&category=fatty-acids").await,
            vec!["omega-3-vegan"]
        );
    }

    #[actix_web::test]
    async fn lists_from_a_borrowed_query() {
        let catalog = Catalog::builtin().unwrap();
        let found = {
            let query = CatalogQuery {
                q: Some(" MAGNESIUM ".to_string()),
                category: None,
            };
            list_ingredients(&catalog, &query).unwrap()
        };
        let ids: Vec<_> = found.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["magnesium"]);
    }

    #[actix_web::test]
    async fn unknown_category_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Catalog::builtin().unwrap()))
                .service(crate::services::catalog::configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/catalog?category=snacks").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
