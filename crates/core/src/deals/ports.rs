//! Port interfaces for deal storage
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use dealdesk_domain::{Deal, DealId, DealStage, Result};

/// Trait for deal persistence and retrieval
///
/// Absence is never an error: lookups return `None` and stage updates return
/// `false` when the id is unknown. Errors are reserved for storage failures.
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// All deals in insertion order
    async fn list(&self) -> Result<Vec<Deal>>;

    /// Get a deal by ID
    async fn get(&self, id: &DealId) -> Result<Option<Deal>>;

    /// Append a new deal
    async fn insert(&self, deal: Deal) -> Result<()>;

    /// Overwrite the stage of an existing deal in place
    ///
    /// Returns `false` without touching anything when the deal is missing.
    async fn set_stage(&self, id: &DealId, stage: DealStage) -> Result<bool>;

    /// Deals whose `client_name` equals `client_name` exactly, in insertion
    /// order
    async fn list_by_client(&self, client_name: &str) -> Result<Vec<Deal>>;

    /// Verify the backing storage is reachable
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
