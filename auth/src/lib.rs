//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for microservices:
//! - Password hashing (Argon2id, adjustable cost)
//! - Time-limited JWT session tokens
//! - Authentication coordination
//!
//! Each service defines its own private claims and adapts these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use std::collections::HashMap;
//!
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let mut private = HashMap::new();
//! private.insert("role".to_string(), "nurse".to_string());
//!
//! let claims = Claims::issue("user123", private, Duration::hours(24));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims<HashMap<String, String>> = handler.decode(&token).unwrap();
//! assert_eq!(decoded.private["role"], "nurse");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::collections::HashMap;
//!
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Seed: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::issue("user123", HashMap::<String, String>::new(), Duration::hours(24));
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded: Claims<HashMap<String, String>> =
//!     auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
