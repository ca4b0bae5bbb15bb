use actix_web::{web, HttpResponse, Responder};
use common::catalog::Catalog;
use common::model::catalog::CatalogIngredient;
use common::requests::RecommendationRequest;
use log::{info, warn};

/// Keywords matched against the lower-cased goal, each with the catalog ids it
/// suggests. Matches are merged in table order without duplicates.
const SUGGESTIONS: &[(&[&str], &[&str])] = &[
    (&["energy", "tired", "fatigue", "vitality"], &["vit-b12", "vit-d3", "omega-3"]),
    (&["sleep", "relax", "stress", "anxiety"], &["magnesium", "ashwagandha"]),
    (&["focus", "brain", "memory", "cognitive"], &["omega-3", "vit-b12", "rhodiola"]),
    (&["immun", "cold", "flu"], &["vit-c", "vit-d3", "zinc"]),
    (&["skin", "beauty", "hair", "nails", "aging"], &["collagen", "vit-c", "vit-e"]),
    (&["muscle", "strength", "recovery", "workout"], &["whey-protein", "creatine", "magnesium"]),
    (&["heart", "cardio", "cholesterol"], &["omega-3", "coq10"]),
    (&["gut", "digest", "bloat"], &["probiotics"]),
    (&["bone", "joint"], &["calcium", "vit-d3", "vit-k2"]),
    (&["weight", "metabolism"], &["l-carnitine", "chromium"]),
];

/// Actix web handler for `POST /api/recommendations`.
///
/// # Returns
/// - `200 OK` with the suggested `CatalogIngredient`s (possibly none).
/// - `400 Bad Request` if the goal is blank.
pub async fn process(request: web::Json<RecommendationRequest>, catalog: web::Data<Catalog>) -> impl Responder {
    match suggest(&catalog, &request.goal) {
        Ok(ingredients) => {
            info!("Suggested {} ingredients for '{}'", ingredients.len(), request.goal.trim());
            HttpResponse::Ok().json(ingredients)
        }
        Err(e) => {
            warn!("Rejected recommendation request: {}", e);
            HttpResponse::BadRequest().body(e)
        }
    }
}

fn suggest<'a>(catalog: &'a Catalog, goal: &str) -> Result<Vec<&'a CatalogIngredient>, String> {
    let goal = goal.trim().to_lowercase();
    if goal.is_empty() {
        return Err("Health goals are required for recommendations".to_string());
    }

    let mut ids: Vec<&str> = Vec::new();
    for (keywords, suggested) in SUGGESTIONS {
        if keywords.iter().any(|k| goal.contains(k)) {
            for id in suggested.iter() {
                if !ids.contains(id) {
                    ids.push(*id);
                }
            }
        }
    }

    Ok(ids
        .into_iter()
        .filter_map(|id| catalog.get(id))
        .map(|i| i.as_ref())
        .collect())
}
