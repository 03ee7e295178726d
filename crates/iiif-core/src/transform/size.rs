//! Size stage: scale the cropped region to its target dimensions.

use image::{DynamicImage, GenericImageView};

use crate::error::TransformError;
use crate::params::SizeSpec;
use crate::transform::ResampleFilter;

/// Scale `img` to the dimensions described by `size`.
///
/// All derived dimensions floor to whole pixels and must come out at one
/// pixel or more; a degenerate target fails rather than being rounded up.
pub fn scale(
    img: DynamicImage,
    size: &SizeSpec,
    filter: ResampleFilter,
) -> Result<DynamicImage, TransformError> {
    let (width, height) = img.dimensions();
    let (fw, fh) = (f64::from(width), f64::from(height));

    let (target_w, target_h) = match *size {
        SizeSpec::Max => return Ok(img),
        SizeSpec::WidthOnly(w) => (w, (fh * f64::from(w) / fw).floor() as u32),
        SizeSpec::HeightOnly(h) => ((fw * f64::from(h) / fh).floor() as u32, h),
        SizeSpec::Percent(pct) => (
            (fw * pct / 100.0).floor() as u32,
            (fh * pct / 100.0).floor() as u32,
        ),
        SizeSpec::ConfinedWH(w, h) => {
            let ratio_w = fw / f64::from(w);
            let ratio_h = fh / f64::from(h);
            // The larger ratio is the binding constraint; on a tie the
            // width ratio wins (the result is identical either way).
            let ratio = if ratio_w >= ratio_h { ratio_w } else { ratio_h };
            ((fw / ratio).floor() as u32, (fh / ratio).floor() as u32)
        }
        SizeSpec::ForcedWH(w, h) => (w, h),
    };

    if target_w == 0 || target_h == 0 {
        return Err(TransformError::EmptyTarget {
            w: target_w,
            h: target_h,
        });
    }

    Ok(img.resize_exact(target_w, target_h, filter.filter_type()))
}
