use thiserror::Error;

/// Error type for session token operations.
///
/// Callers facing clients should collapse every decoding variant into a
/// single "invalid token" answer; the variants exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    EncodingFailed(String),

    #[error("Malformed token: {0}")]
    DecodingFailed(String),

    /// The current time is at or past `exp`. No leeway is granted.
    #[error("Token is expired")]
    TokenExpired,

    /// Signature or algorithm mismatch.
    #[error("Token signature rejected: {0}")]
    InvalidToken(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}

impl JwtError {
    /// Whether the token was well-formed and authentic but past its lifetime.
    pub fn is_expired(&self) -> bool {
        matches!(self, JwtError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_expiry_reports_expired() {
        assert!(JwtError::TokenExpired.is_expired());
        assert!(!JwtError::InvalidToken("bad signature".into()).is_expired());
        assert!(!JwtError::DecodingFailed("not base64".into()).is_expired());
    }
}
