use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::UserDetailsData;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthenticationServicePort;

/// Details of the caller. Only reachable behind the authorization middleware,
/// which inserts the `Identity` extension.
pub async fn get_user_details(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiSuccess<UserDetailsData> {
    let details = state.auth_service.get_user_details(&identity);
    ApiSuccess::new(StatusCode::OK, (&details).into())
}
