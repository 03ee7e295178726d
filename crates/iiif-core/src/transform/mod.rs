//! The four-stage transform pipeline.
//!
//! Stages run in a fixed order — region, size, rotation, quality — because
//! each stage's geometry is defined relative to the previous stage's output:
//! size percentages apply to the cropped region, rotation expands the canvas
//! of the sized image, and quality runs last so photometric work is never
//! spent on discarded pixels.

use image::imageops::FilterType;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::params::ParsedRequest;

pub mod quality;
pub mod region;
pub mod rotation;
pub mod size;

/// Resampling filter for the size stage, decoupled from the codec library's
/// own filter enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    #[default]
    HighQuality,
}

impl ResampleFilter {
    fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::HighQuality => FilterType::Lanczos3,
        }
    }
}

/// Run the full pipeline for one request.
///
/// Each stage consumes its input image and produces a new one; nothing is
/// retained between stages.
pub fn apply(
    img: DynamicImage,
    request: &ParsedRequest,
    filter: ResampleFilter,
) -> Result<DynamicImage, TransformError> {
    let img = region::crop(img, &request.region)?;
    let img = size::scale(img, &request.size, filter)?;
    let img = rotation::rotate(img, &request.rotation);
    Ok(quality::adjust(img, &request.quality))
}
