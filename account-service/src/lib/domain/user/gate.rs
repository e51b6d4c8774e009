use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;

use crate::domain::user::models::Identity;
use crate::domain::user::models::UserRecord;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;
use crate::user::ports::AuthorizationPort;
use crate::user::ports::KeyValueStore;

/// Per-request authorization decision.
///
/// A request moves from an unverified token to a verified one and then to an
/// authorized identity. Either step can reject it, and a rejection is final
/// for that request.
pub struct AuthorizationGate<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    authenticator: Arc<Authenticator>,
}

impl<S> AuthorizationGate<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    fn verify(&self, token: Option<&str>) -> Result<Claims, TokenError> {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(TokenError::InvalidToken)?;

        self.authenticator.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            TokenError::InvalidToken
        })
    }
}

#[async_trait]
impl<S> AuthorizationPort for AuthorizationGate<S>
where
    S: KeyValueStore,
{
    async fn authorize(&self, token: Option<&str>) -> Result<Identity, UserError> {
        let claims = self.verify(token)?;

        let key = UserRecord::storage_key(&claims.username);
        let Some(value) = self.store.get(&key).await? else {
            tracing::warn!(username = %claims.username, "Token presented for a deleted user");
            return Err(TokenError::UnauthorizedAccess.into());
        };

        let record = UserRecord::from_json(&key, &value)?;
        Ok(Identity::from(&record))
    }
}
