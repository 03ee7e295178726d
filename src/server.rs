//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{create_resolver, ImageService};

/// Application state shared across all handlers.
///
/// Everything in here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub images: Arc<ImageService>,
}

/// Create application state from a configuration value.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let config = Arc::new(config);
    let resolver = create_resolver(&config)?;
    let images = Arc::new(ImageService::new(resolver, config.resample_filter));

    Ok(AppState { config, images })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Static routes
/// take precedence over the identifier capture, so `/version` never resolves
/// as an image.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::handle_root))
        .route("/version", get(api::handle_version))
        .route("/:identifier", get(api::handle_identifier_redirect))
        .route("/:identifier/info.json", get(api::handle_image_info))
        .route(
            "/:identifier/:region/:size/:rotation/:quality_format",
            get(api::handle_image_request),
        )
        .fallback(api::handle_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
