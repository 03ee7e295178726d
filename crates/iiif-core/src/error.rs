use thiserror::Error;

/// A URL component failed its grammar or range validation.
///
/// Each variant carries the offending token so error responses can echo it
/// back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("invalid region parameter {0:?}")]
    Region(String),

    #[error("invalid size parameter {0:?}")]
    Size(String),

    #[error("invalid rotation parameter {0:?}")]
    Rotation(String),

    #[error("invalid quality parameter {0:?}")]
    Quality(String),

    #[error("invalid format parameter {0:?}")]
    Format(String),
}

/// The identifier component contains a path separator.
///
/// Unlike [`ParameterError`] this is a routing mismatch, not a client
/// parameter error: no image can ever exist under such an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier contains a path separator")]
pub struct InvalidIdentifier;

/// Failure to assemble a [`ParsedRequest`](crate::ParsedRequest) from raw
/// path components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error(transparent)]
    Identifier(#[from] InvalidIdentifier),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// A pipeline stage could not resolve its geometry against the source image.
///
/// Boxes are never clamped or wrapped: a region or size that resolves
/// outside the source, or to zero pixels, fails the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("region [{x},{y} {w}x{h}] exceeds the {width}x{height} source bounds")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },

    #[error("region resolves to an empty {w}x{h} crop box")]
    EmptyRegion { w: u32, h: u32 },

    #[error("percentage region coordinates must be non-negative")]
    NegativeRegion,

    #[error("size resolves to an empty {w}x{h} target")]
    EmptyTarget { w: u32, h: u32 },
}

/// Serialization of a finished image into the requested format failed.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The format token is part of the request grammar but no codec backend
    /// ships for it.
    #[error("no {codec} encoder available for .{format}")]
    UnsupportedCodec {
        format: &'static str,
        codec: &'static str,
    },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
