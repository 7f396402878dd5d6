use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type to allow services to define their own token payload.
/// Uses HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a shared secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature must match, the `exp` claim must be present and not in
    /// the past. No leeway is granted.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` lies in the past
    /// * `MissingClaim` - `exp` is absent
    /// * `InvalidToken` - Signature or algorithm mismatch
    /// * `DecodingFailed` - Token is malformed or claims do not deserialize
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::InvalidToken(e.to_string())
                }
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}
