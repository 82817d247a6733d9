//! Client routes
//!
//! Clients are not stored; every response is derived from the current deals.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use dealdesk_domain::{ClientAggregate, ClientSummary, Deal};

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::utils::logging::timed;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list))
        .route("/clients/{name}", get(summary))
        .route("/clients/{name}/deals", get(deals))
}

/// GET /clients
pub async fn list(State(ctx): State<AppState>) -> ApiResult<Json<Vec<ClientAggregate>>> {
    timed("clients::list", async {
        let clients = ctx.deals.list_clients_aggregate().await?;
        Ok::<_, ApiError>(Json(clients))
    })
    .await
}

/// GET /clients/{name}
pub async fn summary(
    State(ctx): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ClientSummary>> {
    timed("clients::summary", async {
        let summary = ctx
            .deals
            .client_summary(&name)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Client {name} not found")))?;
        Ok::<_, ApiError>(Json(summary))
    })
    .await
}

/// GET /clients/{name}/deals
pub async fn deals(
    State(ctx): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<Deal>>> {
    timed("clients::deals", async {
        let deals = ctx.deals.list_deals_for_client(&name).await?;
        Ok::<_, ApiError>(Json(deals))
    })
    .await
}
