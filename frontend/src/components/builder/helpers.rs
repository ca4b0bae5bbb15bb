//! Utility functions for the formula builder component.
//!
//! - **Backend calls**: thin `gloo_net` wrappers for the catalog, stacks,
//!   recommendations, health profile and formula endpoints. Each returns the
//!   decoded body or a message fit for a toast.
//! - **User feedback**: temporary toast notifications.
//! - **Formatting**: dosage display.

use common::catalog::stacks::PopularStack;
use common::model::catalog::{CatalogIngredient, Demographic};
use common::model::formula::FormulaRecord;
use common::model::profile::HealthProfile;
use common::requests::{RecommendationRequest, SaveFormulaResponse};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

async fn error_text(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => format!("HTTP {}", status),
    }
}

pub async fn fetch_catalog() -> Result<Vec<CatalogIngredient>, String> {
    let response = Request::get("/api/catalog")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_stacks(demographic: Demographic) -> Result<Vec<PopularStack>, String> {
    let response = Request::get(&format!("/api/catalog/stacks/{}", demographic))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Asks the backend for ingredients matching `goal` and returns their ids.
pub async fn fetch_recommendations(goal: String) -> Result<Vec<String>, String> {
    let response = Request::post("/api/recommendations")
        .json(&RecommendationRequest { goal })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    let ingredients: Vec<CatalogIngredient> = response.json().await.map_err(|e| e.to_string())?;
    Ok(ingredients.into_iter().map(|i| i.id).collect())
}

pub async fn fetch_profile() -> Result<HealthProfile, String> {
    let response = Request::get("/api/health/profile")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Replaces the stored profile and returns it as the backend normalised it.
pub async fn save_profile(profile: &HealthProfile) -> Result<HealthProfile, String> {
    let response = Request::put("/api/health/profile")
        .json(profile)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(error_text(response).await);
    }
    response.json().await.map_err(|e| e.to_string())
}

/// Stores `record` and returns the id the backend assigned.
pub async fn post_formula(record: &FormulaRecord) -> Result<String, String> {
    let response = Request::post("/api/formulas")
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() != 201 {
        return Err(error_text(response).await);
    }
    let saved: SaveFormulaResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(saved.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn colors(&self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Info => ("#e6f4ea", "#1e6b3a"),
            ToastKind::Error => ("#fdecea", "#a12622"),
        }
    }

    /// Errors stay up longer so they can be read.
    fn duration_ms(&self) -> u32 {
        match self {
            ToastKind::Info => 2500,
            ToastKind::Error => 5000,
        }
    }
}

/// Shows `message` in a pill at the top right of the builder and removes it
/// after the kind's duration.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("formula-toast");
    toast.set_text_content(Some(message));

    let toast: HtmlElement = toast.unchecked_into();
    let (background, color) = kind.colors();
    let border = format!("1px solid {}", color);
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("top", "16px"),
        ("right", "16px"),
        ("max-width", "360px"),
        ("background", background),
        ("color", color),
        ("border", border.as_str()),
        ("padding", "8px 14px"),
        ("border-radius", "999px"),
        ("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.12)"),
        ("font-size", "14px"),
        ("z-index", "1000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        let duration = kind.duration_ms();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            toast.remove();
        });
    }
}

/// `600 IU`, `2.5 mg`, `1 billion CFU`.
pub fn format_dosage(dosage: f64, unit: &str) -> String {
    if dosage.fract().abs() < 1e-9 {
        format!("{:.0} {}", dosage, unit)
    } else {
        format!("{:.1} {}", dosage, unit)
    }
}
