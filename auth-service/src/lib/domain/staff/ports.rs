use async_trait::async_trait;

use crate::domain::staff::errors::AuthError;
use crate::domain::staff::models::Credentials;
use crate::domain::staff::models::Session;
use crate::domain::staff::models::SessionClaims;
use crate::domain::staff::models::StaffMember;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue a session token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Signed token together with the matching staff member
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Password` - Stored hash could not be checked
    /// * `TokenIssuance` - Token signing failed
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// Verify a session token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed structure or expired
    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Lookup of staff records.
#[async_trait]
pub trait StaffDirectory: Send + Sync + 'static {
    /// Retrieve a staff member by exact, case-sensitive email match.
    ///
    /// # Returns
    /// Optional staff member (None if not found)
    ///
    /// # Errors
    /// * `DirectoryError` - Backing store failed
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffMember>, AuthError>;
}
