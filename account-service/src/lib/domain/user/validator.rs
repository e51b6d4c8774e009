use std::sync::Arc;

use crate::domain::user::models::UserRecord;
use crate::user::errors::UserError;
use crate::user::errors::ValidationError;
use crate::user::ports::KeyValueStore;

/// Registration-time checks for a candidate username and password.
///
/// Reads the store but never writes to it, so a successful validation does
/// not reserve the username. The caller must still write with
/// [`KeyValueStore::set_if_absent`].
pub struct CredentialValidator<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> CredentialValidator<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate credentials for registration.
    ///
    /// # Errors
    /// * `Validation(InvalidDetails)` - Username or password is empty
    /// * `Validation(DuplicateUser)` - A record already exists for the username
    /// * `Store` - Store read failed
    pub async fn validate(&self, username: &str, password: &str) -> Result<(), UserError> {
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::InvalidDetails.into());
        }

        let key = UserRecord::storage_key(username);
        if self.store.get(&key).await?.is_some() {
            return Err(ValidationError::DuplicateUser.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::store::InMemoryStore;

    fn validator(store: &Arc<InMemoryStore>) -> CredentialValidator<InMemoryStore> {
        CredentialValidator::new(Arc::clone(store))
    }

    #[tokio::test]
    async fn test_accepts_new_user() {
        let store = Arc::new(InMemoryStore::new());

        let result = validator(&store).validate("alice", "secret").await;
        assert!(result.is_ok());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_rejects_empty_details() {
        let store = Arc::new(InMemoryStore::new());
        let validator = validator(&store);

        for (username, password) in [("", ""), ("", "secret"), ("alice", "")] {
            let result = validator.validate(username, password).await;
            assert!(
                matches!(
                    result,
                    Err(UserError::Validation(ValidationError::InvalidDetails))
                ),
                "expected InvalidDetails for ({:?}, {:?})",
                username,
                password
            );
        }
    }

    #[tokio::test]
    async fn test_rejects_existing_user_regardless_of_password() {
        let store = Arc::new(InMemoryStore::new());
        store
            .set("user_alice", r#"{"username":"alice","password":"h"}"#)
            .await
            .unwrap();
        let validator = validator(&store);

        for password in ["secret", "other"] {
            let result = validator.validate("alice", password).await;
            assert!(matches!(
                result,
                Err(UserError::Validation(ValidationError::DuplicateUser))
            ));
        }
    }

    #[tokio::test]
    async fn test_empty_details_checked_before_store() {
        let store = Arc::new(InMemoryStore::new());
        store.set("user_", "{}").await.unwrap();

        let result = validator(&store).validate("", "secret").await;
        assert!(matches!(
            result,
            Err(UserError::Validation(ValidationError::InvalidDetails))
        ));
    }
}
