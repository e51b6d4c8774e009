use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Liveness check. Touches neither the store nor the signing key.
pub async fn health() -> ApiSuccess<HealthData> {
    ApiSuccess::new(StatusCode::OK, HealthData { status: "ok" })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthData {
    pub status: &'static str,
}
