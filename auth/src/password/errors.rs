use thiserror::Error;

/// Error type for password hashing and verification.
///
/// A mismatching password is not an error; `verify` returns `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Argon2 rejected the configured time cost.
    #[error("Invalid hashing cost: {0}")]
    InvalidCost(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a parseable PHC string.
    #[error("Stored password hash is unusable: {0}")]
    VerificationFailed(String),
}
