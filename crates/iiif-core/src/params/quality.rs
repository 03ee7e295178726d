use serde::Serialize;

use crate::error::ParameterError;

/// The photometric transform applied after cropping and resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualitySpec {
    Color,
    Gray,
    Bitonal,
    /// Semantically identical to [`QualitySpec::Color`].
    Default,
}

impl QualitySpec {
    /// Parse a quality URL component. Exactly four tokens are valid.
    pub fn parse(token: &str) -> Result<Self, ParameterError> {
        match token {
            "color" => Ok(QualitySpec::Color),
            "gray" => Ok(QualitySpec::Gray),
            "bitonal" => Ok(QualitySpec::Bitonal),
            "default" => Ok(QualitySpec::Default),
            _ => Err(ParameterError::Quality(token.to_string())),
        }
    }
}
