//! Format encoding: pure serialization of a finished image.
//!
//! No pipeline logic lives here; the transform stages have already produced
//! the final pixels by the time an image reaches [`encode`].

use std::io::Cursor;

use image::DynamicImage;

use crate::error::EncodeError;
use crate::params::FormatSpec;

/// Serialize `img` into the bytes of the requested format.
pub fn encode(img: &DynamicImage, format: FormatSpec) -> Result<Vec<u8>, EncodeError> {
    let Some(codec) = format.image_format() else {
        return Err(EncodeError::UnsupportedCodec {
            format: format.extension(),
            codec: format.codec_name(),
        });
    };

    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);

    // JPEG carries no alpha channel; flatten before handing off.
    if format == FormatSpec::Jpg && img.color().has_alpha() {
        DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut cursor, codec)?;
    } else {
        img.write_to(&mut cursor, codec)?;
    }

    Ok(bytes)
}
