//! Credential primitives for the account service
//!
//! - Password hashing (Argon2id, configurable cost)
//! - JWT token generation and validation (HS256, username claims)
//! - Authentication coordination
//!
//! The crate holds no state beyond the signing key and hashing parameters and
//! performs no I/O; looking users up is the caller's job.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, PasswordHasher};
//!
//! let auth = Authenticator::with_hasher(
//!     b"secret_key_at_least_32_bytes_long!",
//!     PasswordHasher::with_cost(1).unwrap(),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth
//!     .authenticate("password123", &hash, &Claims::new("alice"))
//!     .unwrap();
//!
//! // Validate token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
