use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Identity;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::user::errors::StoreError;
use crate::user::errors::UserError;

/// Port for registration and login.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Username and plaintext password
    ///
    /// # Returns
    /// Identity of the created user
    ///
    /// # Errors
    /// * `Validation(InvalidDetails)` - Username or password is empty
    /// * `Validation(DuplicateUser)` - Username is already taken
    /// * Infrastructure errors from the store or the hasher
    async fn create_user(&self, command: CreateUserCommand) -> Result<Identity, UserError>;

    /// Check credentials and issue a token.
    ///
    /// # Arguments
    /// * `command` - Username and plaintext password
    ///
    /// # Returns
    /// Session carrying the username and a signed token
    ///
    /// # Errors
    /// * `Auth(NotFound)` - No user with this username
    /// * `Auth(Unauthorized)` - Password does not match
    /// * Infrastructure errors from the store, the hasher or the signer
    async fn login(&self, command: LoginCommand) -> Result<Session, UserError>;

    /// Project an authenticated identity into user details.
    fn get_user_details(&self, identity: &Identity) -> Identity;
}

/// Port for the per-request authorization decision.
#[async_trait]
pub trait AuthorizationPort: Send + Sync + 'static {
    /// Resolve a presented token to a live identity.
    ///
    /// # Arguments
    /// * `token` - Raw token header value, if the request carried one
    ///
    /// # Errors
    /// * `Token(InvalidToken)` - Missing, malformed, mis-signed or expired token
    /// * `Token(UnauthorizedAccess)` - Token is valid but its user no longer exists
    /// * Infrastructure errors from the store
    async fn authorize(&self, token: Option<&str>) -> Result<Identity, UserError>;
}

/// Key-value persistence for user records.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the value stored at `key`.
    ///
    /// # Returns
    /// Optional value (None if the key is absent)
    ///
    /// # Errors
    /// * `Unavailable` - Store operation failed
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, replacing any existing value.
    ///
    /// # Errors
    /// * `Unavailable` - Store operation failed
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write `value` at `key` only if the key is absent, atomically.
    ///
    /// # Returns
    /// True if the value was written, false if the key already existed
    ///
    /// # Errors
    /// * `Unavailable` - Store operation failed
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError>;
}
