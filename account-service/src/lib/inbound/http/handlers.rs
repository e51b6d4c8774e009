use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Identity;
use crate::user::errors::ErrorKind;
use crate::user::errors::UserError;
use crate::user::errors::ValidationError;

pub mod create_user;
pub mod get_user_details;
pub mod health;
pub mod login;

/// Body returned for any failure that is not the client's fault.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, Json(ApiErrorBody { errors: message })).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApiError::BadRequest(err.to_string()),
            ErrorKind::Authentication | ErrorKind::Token => {
                ApiError::Unauthorized(err.to_string())
            }
            ErrorKind::Infrastructure => {
                tracing::error!(error = %err, "Request failed on infrastructure error");
                ApiError::ServiceUnavailable(SERVICE_UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }
}

// Bodies axum cannot parse get the same answer as empty credentials.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            status = rejection.status().as_u16(),
            reason = %rejection.body_text(),
            "Rejected request body"
        );
        ApiError::BadRequest(ValidationError::InvalidDetails.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub errors: String,
}

/// Request body shared by registration and login.
///
/// Missing fields parse as empty strings so they fail validation instead of
/// being rejected by the JSON extractor. No `Debug`: it holds a plaintext
/// password.
#[derive(Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetailsData {
    pub username: String,
}

impl From<&Identity> for UserDetailsData {
    fn from(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
        }
    }
}
