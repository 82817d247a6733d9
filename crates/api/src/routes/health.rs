//! Health check route

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(check))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// GET /health
///
/// 200 when the deal storage answers, 503 otherwise.
pub async fn check(State(ctx): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    match ctx.deals.health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthStatus { status: "ok" })),
        Err(err) => {
            warn!(error = %err, label = err.label(), "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthStatus { status: "unavailable" }))
        }
    }
}
