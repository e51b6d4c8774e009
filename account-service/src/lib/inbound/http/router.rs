use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::get_user_details::get_user_details;
use super::handlers::health::health;
use super::handlers::login::login;
use super::middleware::authorize;
use crate::user::ports::AuthenticationServicePort;
use crate::user::ports::AuthorizationPort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthenticationServicePort>,
    pub gate: Arc<dyn AuthorizationPort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthenticationServicePort>,
    gate: Arc<dyn AuthorizationPort>,
) -> Router {
    let state = AppState { auth_service, gate };

    let public_routes = Router::new()
        .route("/", get(health))
        .route("/user/create", post(create_user))
        .route("/user/login", post(login));

    let protected_routes = Router::new()
        .route("/user", get(get_user_details))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    // Headers are left out of the span: they carry the auth token.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
