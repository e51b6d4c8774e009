use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::user::errors::StoreError;

/// Prefix shared by every user record key in the store.
pub const USER_KEY_PREFIX: &str = "user_";

/// Persisted user record.
///
/// Stored as JSON `{"username": ..., "password": <hash>}`. The field is named
/// `password` on the wire but only ever holds the one-way hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl UserRecord {
    /// Store key for a username.
    pub fn storage_key(username: &str) -> String {
        format!("{}{}", USER_KEY_PREFIX, username)
    }

    /// Serialize to the stored JSON layout.
    ///
    /// # Errors
    /// * `MalformedRecord` - Serialization failed
    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::MalformedRecord {
            key: Self::storage_key(&self.username),
            reason: e.to_string(),
        })
    }

    /// Parse a stored value read from `key`.
    ///
    /// # Errors
    /// * `MalformedRecord` - Value is not a valid user record
    pub fn from_json(key: &str, value: &str) -> Result<Self, StoreError> {
        serde_json::from_str(value).map_err(|e| StoreError::MalformedRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Authenticated identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

impl From<&UserRecord> for Identity {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
        }
    }
}

/// Result of a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Command to register a new user.
///
/// The password is plaintext and is hashed by the service; an absent password
/// is represented as an empty string.
#[derive(Clone)]
pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
}

impl CreateUserCommand {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Command to log in with a username and plaintext password.
#[derive(Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        assert_eq!(UserRecord::storage_key("alice"), "user_alice");
        assert_eq!(UserRecord::storage_key(""), "user_");
    }

    #[test]
    fn test_record_layout() {
        let record = UserRecord {
            username: "alice".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        };

        assert_eq!(
            record.to_json().unwrap(),
            r#"{"username":"alice","password":"$argon2id$hash"}"#
        );
    }

    #[test]
    fn test_record_from_json() {
        let record =
            UserRecord::from_json("user_bob", r#"{"username":"bob","password":"h"}"#).unwrap();
        assert_eq!(record.username, "bob");
        assert_eq!(record.password_hash, "h");
    }

    #[test]
    fn test_malformed_record() {
        let result = UserRecord::from_json("user_bob", "not json");
        assert!(matches!(
            result,
            Err(StoreError::MalformedRecord { ref key, .. }) if key == "user_bob"
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let command = CreateUserCommand::new("alice", "secret");
        assert!(!format!("{:?}", command).contains("secret"));

        let login = LoginCommand::new("alice", "secret");
        assert!(!format!("{:?}", login).contains("secret"));

        let session = Session {
            username: "alice".to_string(),
            token: "a.b.c".to_string(),
        };
        assert!(!format!("{:?}", session).contains("a.b.c"));
    }
}
