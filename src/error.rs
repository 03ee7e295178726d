use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use iiif_core::{EncodeError, ParameterError, RequestError, TransformError};

use crate::services::ResolveError;

/// Error body returned by every failing route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub message: String,
    /// Stable taxonomy name for programmatic handling
    pub error_name: &'static str,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Parameter(#[from] ParameterError),

    /// A region or size failed validation against the source dimensions.
    /// Client-caused, so it shares the parameter taxonomy and status.
    #[error("{0}")]
    Geometry(TransformError),

    #[error("no image matching identifier {0:?} was found")]
    IdentifierResolution(String),

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Encode(EncodeError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure anywhere in the resolve → transform → encode flow.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("render task failed: {0}")]
    Task(String),
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        match e {
            // An identifier with a separator is a routing mismatch, never a
            // client parameter error.
            RequestError::Identifier(_) => ApiError::NotFound,
            RequestError::Parameter(e) => ApiError::Parameter(e),
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(identifier) => ApiError::IdentifierResolution(identifier),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Resolve(e) => e.into(),
            RenderError::Transform(e) => ApiError::Geometry(e),
            RenderError::Encode(e) => ApiError::Encode(e),
            RenderError::Task(e) => ApiError::Internal(e),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Parameter(_) | ApiError::Geometry(_) => StatusCode::BAD_REQUEST,
            ApiError::IdentifierResolution(_) | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Encode(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_name(&self) -> &'static str {
        match self {
            ApiError::Parameter(_) | ApiError::Geometry(_) => "ParameterError",
            ApiError::IdentifierResolution(_) => "IdentifierResolutionError",
            ApiError::NotFound => "NotFound",
            ApiError::Encode(_) | ApiError::Internal(_) => "InternalError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            message: self.to_string(),
            error_name: self.error_name(),
        });

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_is_bad_request() {
        let error = ApiError::Parameter(ParameterError::Rotation("361".to_string()));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.error_name(), "ParameterError");
        assert_eq!(error.to_string(), "invalid rotation parameter \"361\"");
    }

    #[test]
    fn test_geometry_error_shares_parameter_taxonomy() {
        let error = ApiError::Geometry(TransformError::EmptyRegion { w: 0, h: 10 });
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.error_name(), "ParameterError");
    }

    #[test]
    fn test_resolution_error_is_not_found() {
        let error = ApiError::IdentifierResolution("missing.png".to_string());
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.error_name(), "IdentifierResolutionError");
        assert_eq!(
            error.to_string(),
            "no image matching identifier \"missing.png\" was found"
        );
    }

    #[test]
    fn test_encode_error_is_internal() {
        let error = ApiError::Encode(EncodeError::UnsupportedCodec {
            format: "jp2",
            codec: "JPEG2000",
        });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error_name(), "InternalError");
    }

    #[test]
    fn test_identifier_request_error_maps_to_not_found() {
        let request_error =
            iiif_core::ParsedRequest::parse("a/b.png", "full", "max", "0", "default", "jpg")
                .unwrap_err();
        let api_error: ApiError = request_error.into();
        assert!(matches!(api_error, ApiError::NotFound));
    }

    #[test]
    fn test_into_response_status_codes() {
        let response =
            ApiError::Parameter(ParameterError::Format("bmp".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::IdentifierResolution("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_render_error_conversion() {
        let error: ApiError = RenderError::Resolve(ResolveError::NotFound("x".to_string())).into();
        assert!(matches!(error, ApiError::IdentifierResolution(_)));

        let error: ApiError = RenderError::Task("cancelled".to_string()).into();
        assert!(matches!(error, ApiError::Internal(_)));
    }
}
