use image::ImageFormat;
use serde::Serialize;

use crate::error::ParameterError;

/// The serialization format of the delivered image.
///
/// The variant set is fixed by the protocol; whether a codec backend
/// actually ships for a variant is a separate question answered by
/// [`FormatSpec::image_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSpec {
    Jpg,
    Tif,
    Png,
    Gif,
    Jp2,
    Pdf,
    Webp,
}

impl FormatSpec {
    /// Every format token the request grammar accepts.
    pub const ALL: [FormatSpec; 7] = [
        FormatSpec::Jpg,
        FormatSpec::Tif,
        FormatSpec::Png,
        FormatSpec::Gif,
        FormatSpec::Jp2,
        FormatSpec::Pdf,
        FormatSpec::Webp,
    ];

    /// Parse a format URL component against the supported set.
    pub fn parse(token: &str) -> Result<Self, ParameterError> {
        match token {
            "jpg" => Ok(FormatSpec::Jpg),
            "tif" => Ok(FormatSpec::Tif),
            "png" => Ok(FormatSpec::Png),
            "gif" => Ok(FormatSpec::Gif),
            "jp2" => Ok(FormatSpec::Jp2),
            "pdf" => Ok(FormatSpec::Pdf),
            "webp" => Ok(FormatSpec::Webp),
            _ => Err(ParameterError::Format(token.to_string())),
        }
    }

    /// The URL token and attachment filename extension.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatSpec::Jpg => "jpg",
            FormatSpec::Tif => "tif",
            FormatSpec::Png => "png",
            FormatSpec::Gif => "gif",
            FormatSpec::Jp2 => "jp2",
            FormatSpec::Pdf => "pdf",
            FormatSpec::Webp => "webp",
        }
    }

    /// The codec this format maps to.
    pub fn codec_name(&self) -> &'static str {
        match self {
            FormatSpec::Jpg => "JPEG",
            FormatSpec::Tif => "TIFF",
            FormatSpec::Png => "PNG",
            FormatSpec::Gif => "GIF",
            FormatSpec::Jp2 => "JPEG2000",
            FormatSpec::Pdf => "PDF",
            FormatSpec::Webp => "WebP",
        }
    }

    /// The media type of the response body.
    pub fn media_type(&self) -> &'static str {
        match self {
            FormatSpec::Jpg => "image/jpeg",
            FormatSpec::Tif => "image/tiff",
            FormatSpec::Png => "image/png",
            FormatSpec::Gif => "image/gif",
            FormatSpec::Jp2 => "image/jp2",
            FormatSpec::Pdf => "application/pdf",
            FormatSpec::Webp => "image/webp",
        }
    }

    /// The codec backend for this format, if one ships.
    ///
    /// `jp2` and `pdf` are valid request tokens with no backend; encoding
    /// them fails downstream with an unsupported-codec error.
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            FormatSpec::Jpg => Some(ImageFormat::Jpeg),
            FormatSpec::Tif => Some(ImageFormat::Tiff),
            FormatSpec::Png => Some(ImageFormat::Png),
            FormatSpec::Gif => Some(ImageFormat::Gif),
            FormatSpec::Webp => Some(ImageFormat::WebP),
            FormatSpec::Jp2 | FormatSpec::Pdf => None,
        }
    }
}
