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

/// Password hashing implementation.
///
/// Argon2id with a per-call random salt. The cost factor is the number of
/// Argon2 passes over memory (`t_cost`); memory and parallelism stay at the
/// Argon2 defaults.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a password hasher with the Argon2 default parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// # Arguments
    /// * `cost` - Number of Argon2 iterations (must be at least 1)
    ///
    /// # Errors
    /// * `InvalidCost` - Argon2 rejected the resulting parameters
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| PasswordError::InvalidCost(format!("cost {}: {}", cost, e)))?;

        Ok(Self { params })
    }

    /// Iteration count used for new hashes.
    pub fn cost(&self) -> u32 {
        self.params.t_cost()
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

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The parameters embedded in `hash` are used, so hashes produced under a
    /// different cost factor still verify.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
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
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::with_cost(1).expect("Failed to build hasher");

        let first = hasher.hash("secret").expect("Failed to hash password");
        let second = hasher.hash("secret").expect("Failed to hash password");

        assert_ne!(first, second);
        assert_ne!(first, "secret");
        assert!(first.starts_with("$argon2id$"));
    }

    #[test]
    fn test_cost_is_encoded_in_hash() {
        let hasher = PasswordHasher::with_cost(3).expect("Failed to build hasher");
        let hash = hasher.hash("secret").expect("Failed to hash password");

        assert_eq!(hasher.cost(), 3);
        assert!(hash.contains("t=3"));
    }

    #[test]
    fn test_verify_hash_from_other_cost() {
        let cheap = PasswordHasher::with_cost(1).expect("Failed to build hasher");
        let expensive = PasswordHasher::with_cost(4).expect("Failed to build hasher");

        let hash = expensive.hash("secret").expect("Failed to hash password");
        assert!(cheap.verify("secret", &hash).expect("Failed to verify"));
    }

    #[test]
    fn test_zero_cost_rejected() {
        let result = PasswordHasher::with_cost(0);
        assert!(matches!(result, Err(PasswordError::InvalidCost(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
