//! HTTP routes
//!
//! | Method & path               | Handler                   |
//! |-----------------------------|---------------------------|
//! | `GET /deals`                | [`deals::list`]           |
//! | `POST /deals`               | [`deals::create`]         |
//! | `GET /deals/{id}`           | [`deals::get_by_id`]      |
//! | `PATCH /deals/{id}/stage`   | [`deals::update_stage`]   |
//! | `GET /deals/{id}/notes`     | [`notes::list`]           |
//! | `POST /deals/{id}/notes`    | [`notes::create`]         |
//! | `GET /clients`              | [`clients::list`]         |
//! | `GET /clients/{name}`       | [`clients::summary`]      |
//! | `GET /clients/{name}/deals` | [`clients::deals`]        |
//! | `GET /pipeline`             | [`pipeline::summary`]     |
//! | `GET /health`               | [`health::check`]         |

use std::sync::Arc;

use axum::Router;
use dealdesk_domain::DealId;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::error::ApiError;

pub mod clients;
pub mod deals;
pub mod health;
pub mod notes;
pub mod pipeline;

/// Shared router state
pub type AppState = Arc<AppContext>;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(deals::router())
        .merge(notes::router())
        .merge(clients::router())
        .merge(pipeline::router())
        .merge(health::router())
}

/// Build the fully configured application
///
/// Used by the server binary and by tests that drive the router directly.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deal ids that do not parse cannot name a stored deal, so they read as
/// not found.
pub(crate) fn parse_deal_id(raw: &str) -> Result<DealId, ApiError> {
    raw.parse::<DealId>().map_err(|_| ApiError::not_found(format!("Deal {raw} not found")))
}
