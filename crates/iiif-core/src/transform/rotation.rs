//! Rotation stage: optional mirror, then a clockwise rotation.

use image::{imageops, DynamicImage, GenericImageView, Rgba, RgbaImage};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use crate::params::RotationSpec;

/// Mirror and rotate `img`.
///
/// Mirroring flips the image horizontally before any rotation. Quarter
/// turns use exact pixel shuffles; any other angle resamples bilinearly
/// about the center of a canvas expanded to the bounding box of the rotated
/// rectangle, with the uncovered corners left transparent.
pub fn rotate(img: DynamicImage, rotation: &RotationSpec) -> DynamicImage {
    let img = if rotation.mirror { img.fliph() } else { img };

    // 360 is a valid request token and a full turn.
    let degrees = rotation.degrees.rem_euclid(360.0);
    if degrees == 0.0 {
        return img;
    }
    if degrees == 90.0 {
        return img.rotate90();
    }
    if degrees == 180.0 {
        return img.rotate180();
    }
    if degrees == 270.0 {
        return img.rotate270();
    }

    let (width, height) = img.dimensions();
    let theta = degrees.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let expanded_w = (f64::from(width) * cos + f64::from(height) * sin).ceil() as u32;
    let expanded_h = (f64::from(width) * sin + f64::from(height) * cos).ceil() as u32;

    let background = Rgba([0u8, 0, 0, 0]);
    let mut canvas = RgbaImage::from_pixel(expanded_w, expanded_h, background);
    imageops::overlay(
        &mut canvas,
        &img.to_rgba8(),
        i64::from((expanded_w - width) / 2),
        i64::from((expanded_h - height) / 2),
    );

    DynamicImage::ImageRgba8(rotate_about_center(
        &canvas,
        theta as f32,
        Interpolation::Bilinear,
        background,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    /// 2x2 image with four distinct corner colors.
    fn quad() -> DynamicImage {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));
        DynamicImage::ImageRgb8(img)
    }

    fn no_mirror(degrees: f64) -> RotationSpec {
        RotationSpec {
            mirror: false,
            degrees,
        }
    }

    #[test]
    fn test_zero_degrees_without_mirror_is_noop() {
        let out = rotate(quad(), &no_mirror(0.0));
        assert_eq!(out.to_rgb8(), quad().to_rgb8());
    }

    #[test]
    fn test_full_turn_is_noop() {
        let out = rotate(quad(), &no_mirror(360.0));
        assert_eq!(out.to_rgb8(), quad().to_rgb8());
    }

    #[test]
    fn test_quarter_turn_is_clockwise() {
        let out = rotate(quad(), &no_mirror(90.0));
        // Clockwise: the top-left red pixel moves to the top-right corner.
        assert_eq!(out.to_rgb8().get_pixel(1, 0), &Rgb([255, 0, 0]));
        assert_eq!(out.to_rgb8().get_pixel(0, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_quarter_turn_swaps_dimensions() {
        let img = DynamicImage::new_rgb8(4, 2);
        assert_eq!(rotate(img, &no_mirror(90.0)).dimensions(), (2, 4));

        let img = DynamicImage::new_rgb8(4, 2);
        assert_eq!(rotate(img, &no_mirror(270.0)).dimensions(), (2, 4));

        let img = DynamicImage::new_rgb8(4, 2);
        assert_eq!(rotate(img, &no_mirror(180.0)).dimensions(), (4, 2));
    }

    #[test]
    fn test_mirror_then_half_turn_is_vertical_flip() {
        let rotation = RotationSpec {
            mirror: true,
            degrees: 180.0,
        };
        let out = rotate(quad(), &rotation);
        assert_eq!(out.to_rgb8(), quad().flipv().to_rgb8());
    }

    #[test]
    fn test_mirror_alone_is_horizontal_flip() {
        let rotation = RotationSpec {
            mirror: true,
            degrees: 0.0,
        };
        let out = rotate(quad(), &rotation);
        assert_eq!(out.to_rgb8(), quad().fliph().to_rgb8());
    }

    #[test]
    fn test_arbitrary_angle_expands_to_bounding_box() {
        let img = DynamicImage::new_rgb8(100, 100);
        let out = rotate(img, &no_mirror(45.0));
        // ceil(100 * sqrt(2)) = 142 on both axes.
        assert_eq!(out.dimensions(), (142, 142));
        // The canvas gains an alpha channel for the uncovered corners.
        assert!(out.color().has_alpha());
    }

    #[test]
    fn test_arbitrary_angle_corners_are_transparent() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            100,
            100,
            Rgb([200, 200, 200]),
        ));
        let out = rotate(img, &no_mirror(45.0)).to_rgba8();
        assert_eq!(out.get_pixel(0, 0).0[3], 0);

        let center = out.get_pixel(71, 71);
        assert_eq!(center.0[3], 255);
        assert_eq!(center.0[0], 200);
    }
}
