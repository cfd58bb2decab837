//! Web UI handlers - the server-rendered catalogue page.
//!
//! Components live in `components/`, the page body in `pages/`, and the
//! data provider hook in `data.rs`. The handlers here render the Dioxus
//! tree to HTML and wrap it in the document shell that carries the
//! `data-theme` attribute the stylesheet keys off.

pub mod components;
pub mod data;
pub mod pages;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use dioxus::prelude::*;

use crate::catalog::CatalogSettings;
use crate::config::Config;
use pages::CataloguePage;

/// Shared state for the handlers: the catalogue settings from the
/// loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub settings: CatalogSettings,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            settings: config.catalog_settings(),
        }
    }
}

/// Root component: provides the catalogue settings to the tree, then
/// renders the page.
#[component]
pub fn App(settings: CatalogSettings) -> Element {
    use_context_provider(|| settings.clone());

    rsx! {
        CataloguePage {}
    }
}

/// Wrap rendered body markup in the HTML document shell. The root
/// element carries the `data-theme` default of light; any saved choice
/// is re-applied by the script the layout puts in the document head.
fn html_doc(body: &str) -> String {
    format!("<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"light\">\n{body}</html>")
}

/// GET / - the catalogue page.
pub async fn catalogue_page(State(state): State<AppState>) -> impl IntoResponse {
    let settings = state.settings.clone();
    let html = dioxus::ssr::render_element(rsx! { App { settings } });
    Html(html_doc(&html))
}

/// GET /bikes - the catalogue as JSON, from the same source selection
/// the page uses.
pub async fn bikes_json(State(state): State<AppState>) -> Response {
    match state.settings.source().load() {
        Ok(bikes) => Json(bikes).into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// GET /health - liveness check.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
