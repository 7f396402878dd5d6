use thiserror::Error;

/// Error for incomplete login input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,
}

/// Top-level error for all authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Unknown email and wrong password are deliberately the same variant
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Malformed, tampered and expired tokens alike
    #[error("Invalid token")]
    InvalidToken,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Directory error: {0}")]
    DirectoryError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => AuthError::Password(e),
            auth::AuthenticationError::JwtError(e) => AuthError::TokenIssuance(e.to_string()),
        }
    }
}
