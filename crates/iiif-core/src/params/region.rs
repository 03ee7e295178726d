use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ParameterError;

static PIXEL_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+),([0-9]+),([0-9]+),([0-9]+)$").unwrap());

/// The sub-rectangle of the source image to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionSpec {
    /// The complete source image.
    Full,
    /// A `min(width, height)` box anchored at the origin.
    Square,
    /// An explicit box in source pixel coordinates.
    PixelBox { x: u32, y: u32, w: u32, h: u32 },
    /// A box expressed as percentages of the source dimensions.
    PercentBox { x: f64, y: f64, w: f64, h: f64 },
}

impl RegionSpec {
    /// Parse a region URL component.
    ///
    /// Accepts `full`, `square`, `x,y,w,h` (unsigned integers) and
    /// `pct:x,y,w,h` (decimal numbers). Anything else fails.
    pub fn parse(token: &str) -> Result<Self, ParameterError> {
        let fail = || ParameterError::Region(token.to_string());

        if token == "full" {
            return Ok(RegionSpec::Full);
        }
        if token == "square" {
            return Ok(RegionSpec::Square);
        }
        if let Some(caps) = PIXEL_BOX.captures(token) {
            let field = |i: usize| caps[i].parse::<u32>().map_err(|_| fail());
            return Ok(RegionSpec::PixelBox {
                x: field(1)?,
                y: field(2)?,
                w: field(3)?,
                h: field(4)?,
            });
        }
        if let Some(rest) = token.strip_prefix("pct:") {
            let fields: Vec<f64> = rest
                .split(',')
                .map(|part| part.parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| fail())?;
            if fields.len() != 4 || fields.iter().any(|value| !value.is_finite()) {
                return Err(fail());
            }
            return Ok(RegionSpec::PercentBox {
                x: fields[0],
                y: fields[1],
                w: fields[2],
                h: fields[3],
            });
        }
        Err(fail())
    }
}
