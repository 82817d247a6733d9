//! Deal routes

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use dealdesk_core::validate_create_deal;
use dealdesk_domain::{CreateDealInput, Deal, DealStage};
use serde::Deserialize;

use super::{parse_deal_id, AppState};
use crate::error::{ApiError, ApiResult};
use crate::utils::logging::timed;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deals", get(list).post(create))
        .route("/deals/{id}", get(get_by_id))
        .route("/deals/{id}/stage", patch(update_stage))
}

/// Body of `PATCH /deals/{id}/stage`.
///
/// `stage` accepts the wire form (`"technical_department"`) or the dashboard
/// label (`"Technical Department"`).
#[derive(Debug, Deserialize)]
pub struct StageUpdate {
    pub stage: String,
}

/// GET /deals
pub async fn list(State(ctx): State<AppState>) -> ApiResult<Json<Vec<Deal>>> {
    timed("deals::list", async {
        let deals = ctx.deals.list_deals().await?;
        Ok::<_, ApiError>(Json(deals))
    })
    .await
}

/// GET /deals/{id}
pub async fn get_by_id(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Deal>> {
    timed("deals::get", async {
        let deal_id = parse_deal_id(&id)?;
        let deal = ctx
            .deals
            .get_deal(&deal_id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Deal {id} not found")))?;
        Ok::<_, ApiError>(Json(deal))
    })
    .await
}

/// POST /deals
pub async fn create(
    State(ctx): State<AppState>,
    payload: Result<Json<CreateDealInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Deal>)> {
    timed("deals::create", async {
        let Json(input) = payload?;
        validate_create_deal(&input)?;
        let deal = ctx.deals.create_deal(input).await?;
        Ok::<_, ApiError>((StatusCode::CREATED, Json(deal)))
    })
    .await
}

/// PATCH /deals/{id}/stage
pub async fn update_stage(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StageUpdate>, JsonRejection>,
) -> ApiResult<Json<Deal>> {
    timed("deals::update_stage", async {
        let deal_id = parse_deal_id(&id)?;
        let Json(update) = payload?;
        let stage = update.stage.parse::<DealStage>().map_err(ApiError::Invalid)?;

        if !ctx.deals.update_stage(&deal_id, stage).await? {
            return Err(ApiError::not_found(format!("Deal {id} not found")));
        }

        let deal = ctx
            .deals
            .get_deal(&deal_id)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Deal {id} not found")))?;
        Ok::<_, ApiError>(Json(deal))
    })
    .await
}
