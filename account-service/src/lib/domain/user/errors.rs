use thiserror::Error;

/// Registration-time failures the client can correct.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid user details")]
    InvalidDetails,

    #[error("User already exists")]
    DuplicateUser,
}

/// Login-time credential mismatches.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,
}

/// Authorization-time failures for a presented token.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid Token")]
    InvalidToken,

    #[error("Unauthorized access")]
    UnauthorizedAccess,
}

/// Error for key-value store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed record at {key}: {reason}")]
    MalformedRecord { key: String, reason: String },
}

/// Coarse classification used to pick a response at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Token,
    Infrastructure,
}

/// Top-level error for all credential operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Client-facing errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) => ErrorKind::Validation,
            UserError::Auth(_) => ErrorKind::Authentication,
            UserError::Token(_) => ErrorKind::Token,
            UserError::Store(_)
            | UserError::Password(_)
            | UserError::Signing(_)
            | UserError::Unknown(_) => ErrorKind::Infrastructure,
        }
    }
}

impl From<tokio::task::JoinError> for UserError {
    fn from(err: tokio::task::JoinError) -> Self {
        UserError::Unknown(format!("Blocking task failed: {}", err))
    }
}
