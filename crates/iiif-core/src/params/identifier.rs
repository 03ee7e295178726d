use crate::error::InvalidIdentifier;

/// Validate an identifier token.
///
/// Identifiers are opaque to the core; the only constraint is that they
/// contain no path separator, since such a token can never name an image
/// (the URL router would have split it into further components).
pub fn parse_identifier(token: &str) -> Result<&str, InvalidIdentifier> {
    if token.contains('/') || token.contains('\\') {
        return Err(InvalidIdentifier);
    }
    Ok(token)
}
