use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequest;
use super::UserDetailsData;
use crate::domain::user::models::CreateUserCommand;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthenticationServicePort;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserDetailsData>, ApiError> {
    let Json(body) = body?;

    state
        .auth_service
        .create_user(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}

impl From<CredentialsRequest> for CreateUserCommand {
    fn from(body: CredentialsRequest) -> Self {
        CreateUserCommand::new(body.username, body.password)
    }
}
