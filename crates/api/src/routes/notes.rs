//! Deal note routes

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use dealdesk_domain::{DealId, DealNote, NewNote};

use super::{parse_deal_id, AppState};
use crate::error::{ApiError, ApiResult};
use crate::utils::logging::timed;

pub fn router() -> Router<AppState> {
    Router::new().route("/deals/{id}/notes", get(list).post(create))
}

/// GET /deals/{id}/notes
pub async fn list(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<DealNote>>> {
    timed("notes::list", async {
        let deal_id = existing_deal(&ctx, &id).await?;
        let notes = ctx.notes.list_notes(&deal_id).await?;
        Ok::<_, ApiError>(Json(notes))
    })
    .await
}

/// POST /deals/{id}/notes
pub async fn create(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewNote>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DealNote>)> {
    timed("notes::create", async {
        let deal_id = existing_deal(&ctx, &id).await?;
        let Json(note) = payload?;
        let note = ctx.notes.add_note(&deal_id, note.author, note.content).await?;
        Ok::<_, ApiError>((StatusCode::CREATED, Json(note)))
    })
    .await
}

async fn existing_deal(ctx: &AppState, raw_id: &str) -> ApiResult<DealId> {
    let deal_id = parse_deal_id(raw_id)?;
    match ctx.deals.get_deal(&deal_id).await? {
        Some(_) => Ok(deal_id),
        None => Err(ApiError::not_found(format!("Deal {raw_id} not found"))),
    }
}
