use serde::Serialize;

use crate::error::RequestError;
use crate::params::{
    parse_identifier, FormatSpec, QualitySpec, RegionSpec, RotationSpec, SizeSpec,
};

/// The fully validated form of an image request.
///
/// Constructed once per incoming request and consumed by the transform
/// pipeline. The `Serialize` impl is the canonical form hashed into the
/// attachment filename, so field order is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRequest {
    pub identifier: String,
    pub region: RegionSpec,
    pub size: SizeSpec,
    pub rotation: RotationSpec,
    pub quality: QualitySpec,
    pub format: FormatSpec,
}

impl ParsedRequest {
    /// Validate all six URL components.
    ///
    /// Parsing stops at the first failing component; an identifier failure
    /// is reported as [`RequestError::Identifier`] (a routing mismatch)
    /// rather than a parameter error.
    pub fn parse(
        identifier: &str,
        region: &str,
        size: &str,
        rotation: &str,
        quality: &str,
        format: &str,
    ) -> Result<Self, RequestError> {
        Ok(ParsedRequest {
            identifier: parse_identifier(identifier)?.to_string(),
            region: RegionSpec::parse(region)?,
            size: SizeSpec::parse(size)?,
            rotation: RotationSpec::parse(rotation)?,
            quality: QualitySpec::parse(quality)?,
            format: FormatSpec::parse(format)?,
        })
    }
}
