//! Pipeline overview route

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use dealdesk_domain::PipelineSummary;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::utils::logging::timed;

pub fn router() -> Router<AppState> {
    Router::new().route("/pipeline", get(summary))
}

/// GET /pipeline
pub async fn summary(State(ctx): State<AppState>) -> ApiResult<Json<PipelineSummary>> {
    timed("pipeline::summary", async {
        let summary = ctx.deals.pipeline_summary().await?;
        Ok::<_, ApiError>(Json(summary))
    })
    .await
}
