//! Region stage: crop the source to the requested sub-rectangle.

use image::{DynamicImage, GenericImageView};

use crate::error::TransformError;
use crate::params::RegionSpec;

/// Crop `img` to the region described by `region`.
///
/// Percent boxes resolve against the source dimensions by flooring
/// `pct/100 * dimension`. A resolved box is validated, never clamped: it
/// must have strictly positive width and height and lie entirely inside the
/// source.
pub fn crop(img: DynamicImage, region: &RegionSpec) -> Result<DynamicImage, TransformError> {
    let (width, height) = img.dimensions();

    let (x, y, w, h) = match *region {
        RegionSpec::Full => return Ok(img),
        RegionSpec::Square => {
            if width == height {
                return Ok(img);
            }
            let side = width.min(height);
            (0, 0, side, side)
        }
        RegionSpec::PixelBox { x, y, w, h } => (x, y, w, h),
        RegionSpec::PercentBox { x, y, w, h } => {
            resolve_percent_box(x, y, w, h, width, height)?
        }
    };

    if w == 0 || h == 0 {
        return Err(TransformError::EmptyRegion { w, h });
    }
    if u64::from(x) + u64::from(w) > u64::from(width)
        || u64::from(y) + u64::from(h) > u64::from(height)
    {
        return Err(TransformError::RegionOutOfBounds {
            x,
            y,
            w,
            h,
            width,
            height,
        });
    }

    Ok(img.crop_imm(x, y, w, h))
}

fn resolve_percent_box(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    width: u32,
    height: u32,
) -> Result<(u32, u32, u32, u32), TransformError> {
    if x < 0.0 || y < 0.0 || w < 0.0 || h < 0.0 {
        return Err(TransformError::NegativeRegion);
    }
    // x and w scale by source width, y and h by source height. The `as u32`
    // cast saturates, so absurd percentages still fail the bounds check.
    let scale = |pct: f64, dimension: u32| (pct / 100.0 * f64::from(dimension)).floor() as u32;
    Ok((
        scale(x, width),
        scale(y, height),
        scale(w, width),
        scale(h, height),
    ))
}
