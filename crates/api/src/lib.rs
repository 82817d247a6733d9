//! # DealDesk API
//!
//! HTTP application layer - routes, error mapping and the server entry point.
//!
//! This crate contains:
//! - axum routes (HTTP → deal store bridge)
//! - Application context (dependency injection)
//! - Tracing setup and the `dealdesk` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Runs input validation before anything reaches the store

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use error::{ApiError, ApiResult};
pub use routes::{build_app, build_router, AppState};
