use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use chrono::Duration;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Identity;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::UserRecord;
use crate::domain::user::validator::CredentialValidator;
use crate::user::errors::AuthError;
use crate::user::errors::UserError;
use crate::user::errors::ValidationError;
use crate::user::ports::AuthenticationServicePort;
use crate::user::ports::KeyValueStore;

/// Domain service for registration and login.
///
/// Password hashing and comparison run on the blocking pool so a request
/// waiting on Argon2 does not hold up the runtime.
pub struct AuthenticationService<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    validator: CredentialValidator<S>,
    authenticator: Arc<Authenticator>,
    token_lifetime: Option<Duration>,
}

impl<S> AuthenticationService<S>
where
    S: KeyValueStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Key-value store holding user records
    /// * `authenticator` - Password hasher and token signer
    pub fn new(store: Arc<S>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            validator: CredentialValidator::new(Arc::clone(&store)),
            store,
            authenticator,
            token_lifetime: None,
        }
    }

    /// Issue tokens that expire after `lifetime`. `None` issues non-expiring tokens.
    pub fn with_token_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password)).await??;
        Ok(hash)
    }

    async fn issue_token(
        &self,
        password: String,
        record: &UserRecord,
    ) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = record.password_hash.clone();
        let claims = Claims::for_user(record.username.as_str(), self.token_lifetime)
            .map_err(|e| UserError::Signing(e.to_string()))?;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await?;

        match result {
            Ok(result) => Ok(result.access_token),
            Err(AuthenticationError::InvalidCredentials) => Err(AuthError::Unauthorized.into()),
            Err(AuthenticationError::PasswordError(e)) => Err(e.into()),
            Err(AuthenticationError::JwtError(e)) => Err(UserError::Signing(e.to_string())),
        }
    }
}

#[async_trait]
impl<S> AuthenticationServicePort for AuthenticationService<S>
where
    S: KeyValueStore,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<Identity, UserError> {
        self.validator
            .validate(&command.username, &command.password)
            .await?;

        let record = UserRecord {
            password_hash: self.hash_password(command.password).await?,
            username: command.username,
        };

        let key = UserRecord::storage_key(&record.username);
        if !self.store.set_if_absent(&key, &record.to_json()?).await? {
            tracing::warn!(
                username = %record.username,
                "Concurrent registration won the race for this username"
            );
            return Err(ValidationError::DuplicateUser.into());
        }

        tracing::info!(username = %record.username, "User registered");

        Ok(Identity::from(&record))
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let key = UserRecord::storage_key(&command.username);
        let value = self.store.get(&key).await?.ok_or(AuthError::NotFound)?;
        let record = UserRecord::from_json(&key, &value)?;

        let token = self
            .issue_token(command.password, &record)
            .await
            .map_err(|e| {
                if matches!(e, UserError::Auth(AuthError::Unauthorized)) {
                    tracing::info!(username = %record.username, "Login rejected: wrong password");
                }
                e
            })?;

        tracing::info!(username = %record.username, "User logged in");

        Ok(Session {
            username: record.username,
            token,
        })
    }

    fn get_user_details(&self, identity: &Identity) -> Identity {
        identity.clone()
    }
}
