//! Fixture images written into each test app's temporary image root.

use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;

/// Identifiers of the fixture images.
pub mod ids {
    /// 300x200 quadrant image: red, green, blue, white corners.
    pub const RGB: &str = "rgb.png";
    /// 256x256 solid gray square.
    pub const SQUARE: &str = "square.png";
    /// 200x100 landscape, 2:1 aspect.
    pub const WIDE: &str = "wide.png";
    /// 1000x1000 quadrant image.
    pub const BIG: &str = "big.png";
    /// Identifier with a space, exercising percent-encoding.
    pub const SPACED: &str = "scan 01.png";
    /// Never written to disk.
    pub const MISSING: &str = "missing.png";
}

/// 300x200 image with four distinct 150x100 quadrants.
///
/// Top-left red, top-right green, bottom-left blue, bottom-right white, so
/// mirror and rotation tests can track where each corner lands.
pub fn quadrant_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        match (x < width / 2, y < height / 2) {
            (true, true) => Rgb([255, 0, 0]),
            (false, true) => Rgb([0, 255, 0]),
            (true, false) => Rgb([0, 0, 255]),
            (false, false) => Rgb([255, 255, 255]),
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Write every fixture into `dir`.
pub fn write_all(dir: &Path) {
    quadrant_image(300, 200).save(dir.join(ids::RGB)).unwrap();
    quadrant_image(1000, 1000).save(dir.join(ids::BIG)).unwrap();

    let square = DynamicImage::ImageRgb8(RgbImage::from_pixel(256, 256, Rgb([128, 128, 128])));
    square.save(dir.join(ids::SQUARE)).unwrap();

    quadrant_image(200, 100).save(dir.join(ids::WIDE)).unwrap();
    quadrant_image(64, 64).save(dir.join(ids::SPACED)).unwrap();
}
