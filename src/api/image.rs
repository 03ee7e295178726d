use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use iiif_core::ParsedRequest;

use crate::error::ApiError;
use crate::server::AppState;

/// Serve a transformed view of an image
///
/// The five path parameters after the identifier encode the transform:
/// region, size, rotation, and a final `{quality}.{format}` segment.
#[utoipa::path(
    get,
    path = "/{identifier}/{region}/{size}/{rotation}/{quality_format}",
    responses(
        (status = 200, description = "Transformed image bytes"),
        (status = 400, description = "Malformed parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorResponse),
        (status = 500, description = "Transform or encode failure", body = crate::error::ErrorResponse),
    ),
    params(
        ("identifier" = String, Path, description = "Image identifier"),
        ("region" = String, Path, description = "full | square | x,y,w,h | pct:x,y,w,h"),
        ("size" = String, Path, description = "full | max | w, | ,h | pct:n | w,h | !w,h"),
        ("rotation" = String, Path, description = "Degrees in [0,360], optional ! mirror prefix"),
        ("quality_format" = String, Path, description = "{color|gray|bitonal|default}.{format}"),
    ),
    tag = "Image"
)]
pub async fn handle_image_request(
    State(state): State<AppState>,
    Path((identifier, region, size, rotation, quality_format)): Path<(
        String,
        String,
        String,
        String,
        String,
    )>,
) -> Result<Response, ApiError> {
    // The route template ends in `{quality}.{format}`; a segment without
    // the separator matches no image URL.
    let Some((quality, format)) = quality_format.rsplit_once('.') else {
        return Err(ApiError::NotFound);
    };

    let request = ParsedRequest::parse(&identifier, &region, &size, &rotation, quality, format)?;

    tracing::debug!(
        identifier = %request.identifier,
        region = %region,
        size = %size,
        rotation = %rotation,
        quality = quality,
        format = format,
        "Image request received"
    );

    let rendered = state.images.render(request).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, rendered.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", rendered.filename),
            ),
            (header::CONTENT_LENGTH, rendered.bytes.len().to_string()),
        ],
        Bytes::from(rendered.bytes),
    )
        .into_response())
}
