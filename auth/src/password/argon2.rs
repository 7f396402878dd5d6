use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Salted, adaptive password hashing (Argon2id).
///
/// Every call to [`PasswordHasher::hash`] draws a fresh random salt, so hashing
/// the same plaintext twice yields two different PHC strings that both verify.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Default adaptive cost (Argon2 iteration count).
    pub const DEFAULT_COST: u32 = Params::DEFAULT_T_COST;

    /// Create a password hasher with the default cost.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a password hasher with a specific cost.
    ///
    /// # Arguments
    /// * `cost` - Argon2 iteration count (time cost), at least 1
    ///
    /// # Errors
    /// * `InvalidCost` - Argon2 rejected the parameters
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The salt and cost are read back from the PHC string, so hashes produced
    /// with any cost verify here.
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "nursing123";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("nursing123").expect("Failed to hash password");
        let second = hasher.hash("nursing123").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("nursing123", &first).unwrap());
        assert!(hasher.verify("nursing123", &second).unwrap());
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("nursing123").expect("Failed to hash password");

        assert!(!hasher.verify("NURSING123", &hash).unwrap());
        assert!(!hasher.verify("Nursing123", &hash).unwrap());
        assert!(!hasher.verify("nursing123 ", &hash).unwrap());
    }

    #[test]
    fn test_with_cost_embeds_cost_in_hash() {
        let hasher = PasswordHasher::with_cost(3).expect("Failed to build hasher");
        let hash = hasher.hash("nursing123").expect("Failed to hash password");

        assert!(hash.contains("t=3"));
        // Verification reads the cost from the hash itself
        assert!(PasswordHasher::new().verify("nursing123", &hash).unwrap());
    }

    #[test]
    fn test_with_zero_cost_is_rejected() {
        let result = PasswordHasher::with_cost(0);
        assert!(matches!(result, Err(PasswordError::InvalidCost(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }
}
