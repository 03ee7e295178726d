use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json, Redirect, Response},
};

use iiif_core::{parse_identifier, ImageInfo};

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::encode_identifier;

/// Serve the JSON-LD capability document for an identifier
///
/// The document is assembled fresh on every request from the resolved
/// image's dimensions and static configuration.
#[utoipa::path(
    get,
    path = "/{identifier}/info.json",
    responses(
        (status = 200, description = "Capability document", content_type = "application/ld+json"),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorResponse),
    ),
    params(("identifier" = String, Path, description = "Image identifier")),
    tag = "Info"
)]
pub async fn handle_image_info(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Response, ApiError> {
    let identifier = parse_identifier(&identifier).map_err(|_| ApiError::NotFound)?;

    let (width, height) = state.images.describe(identifier).await?;

    let id_url = format!("{}/{}", state.config.base_url(), encode_identifier(identifier));
    let mut info = ImageInfo::new(id_url, width, height);
    info.attribution = state.config.attribution.clone();
    info.license = state.config.license.clone();
    info.logo = state.config.logo.clone();

    tracing::debug!(identifier = identifier, width, height, "Info document served");

    Ok((
        [
            (header::CONTENT_TYPE, "application/ld+json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(info),
    )
        .into_response())
}

/// Redirect a bare identifier to its capability document
#[utoipa::path(
    get,
    path = "/{identifier}",
    responses((status = 303, description = "Redirect to info.json")),
    params(("identifier" = String, Path, description = "Image identifier")),
    tag = "Info"
)]
pub async fn handle_identifier_redirect(
    Path(identifier): Path<String>,
) -> Result<Redirect, ApiError> {
    let identifier = parse_identifier(&identifier).map_err(|_| ApiError::NotFound)?;
    Ok(Redirect::to(&format!(
        "/{}/info.json",
        encode_identifier(identifier)
    )))
}
