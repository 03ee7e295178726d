use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ParameterError;

static WH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(!)?([0-9]+),([0-9]+)$").unwrap());

/// The target pixel dimensions after cropping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeSpec {
    /// Keep the cropped region's dimensions. Both `full` and `max` tokens
    /// normalize here; matching is by value, never by token identity.
    Max,
    /// Scale to this width, preserving aspect ratio.
    WidthOnly(u32),
    /// Scale to this height, preserving aspect ratio.
    HeightOnly(u32),
    /// Scale both axes by a percentage.
    Percent(f64),
    /// Resize to exactly `w`x`h`, ignoring aspect ratio.
    ForcedWH(u32, u32),
    /// Best fit within a `w`x`h` box, preserving aspect ratio.
    ConfinedWH(u32, u32),
}

impl SizeSpec {
    /// Parse a size URL component.
    ///
    /// Accepts `full`/`max`, `w,`, `,h`, `pct:n`, `w,h` and `!w,h`. All
    /// integers must be positive and percentages finite and greater than
    /// zero.
    pub fn parse(token: &str) -> Result<Self, ParameterError> {
        let fail = || ParameterError::Size(token.to_string());
        let positive = |s: &str| match s.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(fail()),
        };

        if token == "full" || token == "max" {
            return Ok(SizeSpec::Max);
        }
        if let Some(rest) = token.strip_suffix(',') {
            if !rest.contains(',') {
                return Ok(SizeSpec::WidthOnly(positive(rest)?));
            }
        }
        if let Some(rest) = token.strip_prefix(',') {
            if !rest.contains(',') {
                return Ok(SizeSpec::HeightOnly(positive(rest)?));
            }
        }
        if let Some(rest) = token.strip_prefix("pct:") {
            let pct: f64 = rest.parse().map_err(|_| fail())?;
            if !pct.is_finite() || pct <= 0.0 {
                return Err(fail());
            }
            return Ok(SizeSpec::Percent(pct));
        }
        if let Some(caps) = WH.captures(token) {
            let w = positive(&caps[2])?;
            let h = positive(&caps[3])?;
            return Ok(if caps.get(1).is_some() {
                SizeSpec::ConfinedWH(w, h)
            } else {
                SizeSpec::ForcedWH(w, h)
            });
        }
        Err(fail())
    }
}
