use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for auth-service.
///
/// Keys map one-to-one onto environment variables (`PORT`, `JWT_SECRET`,
/// `JWT_EXPIRES_IN`, `CORS_ORIGIN`, `HASH_COST`).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expires_in: String,
    pub cors_origin: String,
    pub hash_cost: u32,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 3002;
    pub const DEFAULT_EXPIRES_IN: &'static str = "24h";
    pub const DEFAULT_CORS_ORIGIN: &'static str = "http://localhost:3000";
    pub const DEFAULT_HASH_COST: u32 = auth::PasswordHasher::DEFAULT_COST;

    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (PORT, JWT_SECRET, ...)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (everything except the JWT secret)
    ///
    /// # Errors
    /// Returns error if the JWT secret is missing or a value is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("port", i64::from(Self::DEFAULT_PORT))?
            .set_default("jwt_expires_in", Self::DEFAULT_EXPIRES_IN)?
            .set_default("cors_origin", Self::DEFAULT_CORS_ORIGIN)?
            .set_default("hash_cost", i64::from(Self::DEFAULT_HASH_COST))?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Values stay strings until deserialized so a numeric-looking
            // secret reaches the signer untouched
            .add_source(Environment::default())
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check values that deserialize fine but cannot run the service.
    ///
    /// # Errors
    /// Returns error for an empty secret, a non-positive or unparseable
    /// token lifetime, or a zero hashing cost
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Message("JWT_SECRET must not be empty".to_string()));
        }
        if self.hash_cost == 0 {
            return Err(ConfigError::Message("HASH_COST must be at least 1".to_string()));
        }
        self.token_ttl()?;
        Ok(())
    }

    /// Lifetime of issued session tokens.
    ///
    /// # Errors
    /// Returns error if `jwt_expires_in` is unparseable or not positive
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        match parse_expires_in(&self.jwt_expires_in) {
            Some(ttl) if ttl > Duration::zero() => Ok(ttl),
            _ => Err(ConfigError::Message(format!(
                "JWT_EXPIRES_IN is not a positive duration: {:?}",
                self.jwt_expires_in
            ))),
        }
    }
}

/// Parse a token lifetime such as `"24h"`, `"90 minutes"`, `"7d"` or `"3600000"`.
///
/// A bare number counts milliseconds. Fractions are allowed (`"1.5h"`).
pub fn parse_expires_in(value: &str) -> Option<Duration> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);

    let amount: f64 = amount.parse().ok()?;
    let unit_millis: f64 = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600_000.0,
        _ => return None,
    };

    let millis = amount * unit_millis;
    if !millis.is_finite() {
        return None;
    }

    Some(Duration::milliseconds(millis.round() as i64))
}
