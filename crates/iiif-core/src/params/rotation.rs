use serde::Serialize;

use crate::error::ParameterError;

/// Mirroring plus a clockwise rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotationSpec {
    /// Flip horizontally before rotating.
    pub mirror: bool,
    /// Clockwise rotation, `0.0..=360.0`.
    pub degrees: f64,
}

impl RotationSpec {
    /// Parse a rotation URL component.
    ///
    /// A leading `!` sets the mirror flag and is stripped before the numeric
    /// value is read. The remainder must be a real number within `[0, 360]`
    /// inclusive.
    pub fn parse(token: &str) -> Result<Self, ParameterError> {
        let fail = || ParameterError::Rotation(token.to_string());

        let (mirror, rest) = match token.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        if rest.is_empty() {
            return Err(fail());
        }
        let degrees: f64 = rest.parse().map_err(|_| fail())?;
        if !(0.0..=360.0).contains(&degrees) {
            return Err(fail());
        }
        Ok(RotationSpec { mirror, degrees })
    }
}
