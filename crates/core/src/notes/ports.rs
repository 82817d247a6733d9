//! Port interfaces for deal notes

use async_trait::async_trait;
use dealdesk_domain::{DealId, DealNote, Result};

/// Trait for note storage
#[async_trait]
pub trait NotesRepository: Send + Sync {
    /// Store a note
    async fn add(&self, note: DealNote) -> Result<()>;

    /// Notes for one deal, newest first
    async fn list_for_deal(&self, deal_id: &DealId) -> Result<Vec<DealNote>>;
}
