use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims: the registered time-limited session claims plus a
/// service-defined set of private claims.
///
/// The private claims are flattened into the token payload, so a token for
/// `Claims<Profile>` carries `sub`, `iat`, `exp` and every field of `Profile`
/// side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<T> {
    /// Subject (user/entity identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Service-specific claims
    #[serde(flatten)]
    pub private: T,
}

impl<T> Claims<T> {
    /// Create claims issued now and expiring after `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `private` - Service-specific claims carried by the token
    /// * `ttl` - Time until the token expires
    pub fn issue(subject: impl ToString, private: T, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            private,
        }
    }

    /// Token lifetime in seconds.
    pub fn lifetime(&self) -> i64 {
        self.exp - self.iat
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token stops being valid at the instant of its `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
