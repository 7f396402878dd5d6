use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with the default hashing cost.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_hasher(jwt_secret, PasswordHasher::new())
    }

    /// Create a new authenticator around an already configured hasher.
    pub fn with_hasher(jwt_secret: &[u8], password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash without issuing a token.
    ///
    /// # Errors
    /// * `PasswordError` - The stored hash is unusable
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.verify_password(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate JWT token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token<T: Serialize>(&self, claims: &Claims<T>) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate and decode a session token.
    ///
    /// Rejects tokens whose signature does not match, whose structure is
    /// malformed, or whose `exp` is at or before the current time.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token<T: for<'de> Deserialize<'de>>(
        &self,
        token: &str,
    ) -> Result<Claims<T>, JwtError> {
        let claims: Claims<T> = self.jwt_handler.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Profile {
        role: String,
    }

    fn claims(ttl: Duration) -> Claims<Profile> {
        Claims::issue(
            "user123",
            Profile {
                role: "nurse".to_string(),
            },
            ttl,
        )
    }

    #[test]
    fn test_verify_password() {
        let authenticator = Authenticator::new(SECRET);
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        assert!(authenticator.verify_password("my_password", &hash).unwrap());
        assert!(!authenticator.verify_password("My_password", &hash).unwrap());
        assert!(authenticator.verify_password("my_password", "garbage").is_err());
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let claims = claims(Duration::hours(24));
        let result = authenticator
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded: Claims<Profile> = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result =
            authenticator.authenticate("wrong_password", &hash, &claims(Duration::hours(1)));
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let authenticator = Authenticator::new(SECRET);

        let result =
            authenticator.authenticate("my_password", "not-a-hash", &claims(Duration::hours(1)));
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_validate_expired_token() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .generate_token(&claims(Duration::hours(-1)))
            .expect("Failed to generate token");

        let result = authenticator.validate_token::<Profile>(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_validate_token_expiring_now() {
        let authenticator = Authenticator::new(SECRET);

        let token = authenticator
            .generate_token(&claims(Duration::zero()))
            .expect("Failed to generate token");

        let result = authenticator.validate_token::<Profile>(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET);

        let result = authenticator.validate_token::<Profile>("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_tampered_token() {
        let authenticator = Authenticator::new(SECRET);
        let token = authenticator
            .generate_token(&claims(Duration::hours(1)))
            .expect("Failed to generate token");

        let forged = Authenticator::new(b"another_secret_key_at_least_32_bytes")
            .generate_token(&claims(Duration::hours(1)))
            .expect("Failed to generate token");
        let (payload, _) = token.rsplit_once('.').unwrap();
        let (_, forged_signature) = forged.rsplit_once('.').unwrap();
        let tampered = format!("{}.{}", payload, forged_signature);

        let result = authenticator.validate_token::<Profile>(&tampered);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }
}
