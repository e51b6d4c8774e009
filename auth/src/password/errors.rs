use thiserror::Error;

/// Error type for password operations.
///
/// None of these describe a wrong password: a mismatch is reported as
/// `Ok(false)` by [`super::PasswordHasher::verify`].
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Invalid hash cost: {0}")]
    InvalidCost(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
