use axum::response::{IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Response from the liveness route.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Liveness indicator
    #[serde(rename = "Status")]
    pub status: &'static str,
}

/// Response from the version route.
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    /// Server semver
    pub version: &'static str,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is up", body = StatusResponse)),
    tag = "Server"
)]
pub async fn handle_root() -> impl IntoResponse {
    Json(StatusResponse {
        status: "Not broken!",
    })
}

/// Report the server version
#[utoipa::path(
    get,
    path = "/version",
    responses((status = 200, description = "Server version", body = VersionResponse)),
    tag = "Server"
)]
pub async fn handle_version() -> impl IntoResponse {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for paths no route matches, so 404s carry the same error body
/// as every other failure.
pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}
