use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::JwtError;

/// Claims carried by an access token.
///
/// A token identifies a user by username only. `exp` is written only when the
/// issuer configured a token lifetime; tokens without it never expire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub username: String,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create non-expiring claims for a user.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            exp: None,
        }
    }

    /// Create claims for a user, expiring after `lifetime` if one is given.
    ///
    /// # Errors
    /// * `LifetimeOutOfRange` - Expiry falls outside the representable time range
    pub fn for_user(
        username: impl Into<String>,
        lifetime: Option<Duration>,
    ) -> Result<Self, JwtError> {
        let claims = Self::new(username);
        match lifetime {
            Some(lifetime) => {
                let exp = Utc::now()
                    .checked_add_signed(lifetime)
                    .ok_or(JwtError::LifetimeOutOfRange)?;
                Ok(claims.with_expiration(exp.timestamp()))
            }
            None => Ok(claims),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }
}
