//! Quality stage: photometric adjustment of the finished geometry.

use image::DynamicImage;

use crate::params::QualitySpec;

/// Bitonal cut-off on the luminance channel.
const BITONAL_THRESHOLD: u8 = 128;

/// Apply the requested photometric transform.
///
/// `gray` and `bitonal` reduce to luminance and then re-expand to RGB with
/// R=G=B, so the channel layout the encoder sees is the same for every
/// quality.
pub fn adjust(img: DynamicImage, quality: &QualitySpec) -> DynamicImage {
    match quality {
        QualitySpec::Default | QualitySpec::Color => img,
        QualitySpec::Gray => DynamicImage::ImageLuma8(img.to_luma8()).to_rgb8().into(),
        QualitySpec::Bitonal => {
            let mut luma = img.to_luma8();
            for pixel in luma.pixels_mut() {
                pixel.0[0] = if pixel.0[0] >= BITONAL_THRESHOLD { 255 } else { 0 };
            }
            DynamicImage::ImageLuma8(luma).to_rgb8().into()
        }
    }
}
