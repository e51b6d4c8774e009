use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::AuthorizationPort;

/// Header carrying the bearer token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Middleware that resolves the `x-auth-token` header to a live user and adds
/// its `Identity` to request extensions.
///
/// A header that is not valid visible ASCII is treated as missing.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let identity = state
        .gate
        .authorize(token.as_deref())
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
