use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;

use crate::domain::staff::errors::AuthError;
use crate::domain::staff::models::Credentials;
use crate::domain::staff::models::Session;
use crate::domain::staff::models::SessionClaims;
use crate::domain::staff::models::StaffClaims;
use crate::domain::staff::ports::AuthServicePort;
use crate::domain::staff::ports::StaffDirectory;

/// Domain service implementation for authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<D>
where
    D: StaffDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
    decoy_hash: Option<String>,
}

/// Plaintext behind the decoy hash checked for unknown emails. Never a real password.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

impl<D> AuthService<D>
where
    D: StaffDirectory,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Staff record lookup
    /// * `authenticator` - Password verification and token signing
    /// * `token_ttl` - Lifetime of issued session tokens
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        let decoy_hash = match authenticator.hash_password(DECOY_PASSWORD) {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to prepare decoy hash");
                None
            }
        };

        Self {
            directory,
            authenticator,
            token_ttl,
            decoy_hash,
        }
    }

    /// Spend the same Argon2 work on an unknown email as on a real account,
    /// so response time does not reveal which emails exist.
    async fn verify_decoy(&self, password: &str) {
        let Some(decoy_hash) = self.decoy_hash.clone() else {
            return;
        };
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();

        let _ = tokio::task::spawn_blocking(move || {
            authenticator.verify_password(&password, &decoy_hash)
        })
        .await;
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: StaffDirectory,
{
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let Some(member) = self.directory.find_by_email(credentials.email()).await? else {
            self.verify_decoy(credentials.password()).await;
            tracing::debug!(reason = "unknown_email", "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let claims = SessionClaims::issue(&member.id, member.claims(), self.token_ttl);

        // Argon2 verification is CPU-bound, keep it off the I/O workers
        let authenticator = Arc::clone(&self.authenticator);
        let password = credentials.password().to_string();
        let stored_hash = member.password_hash.clone();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| AuthError::Unknown(format!("Password verification task failed: {}", e)))?
        .map_err(|e| {
            if matches!(e, auth::AuthenticationError::InvalidCredentials) {
                tracing::debug!(reason = "password_mismatch", "Login rejected");
            }
            AuthError::from(e)
        })?;

        tracing::info!(
            user_id = %member.id,
            role = %member.role,
            "Session token issued"
        );

        Ok(Session {
            token: result.access_token,
            member,
        })
    }

    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.authenticator
            .validate_token::<StaffClaims>(token)
            .map_err(|e| {
                if e.is_expired() {
                    tracing::debug!("Expired session token presented");
                } else {
                    tracing::warn!(error = %e, "JWT validation failed");
                }
                AuthError::InvalidToken
            })
    }
}
