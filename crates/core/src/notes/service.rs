//! Deal notes service

use std::sync::Arc;

use chrono::Utc;
use dealdesk_domain::{DealDeskError, DealId, DealNote, Result};
use tracing::info;
use uuid::Uuid;

use super::ports::NotesRepository;

/// Adds and lists notes on deals.
///
/// Does not check that the deal exists; callers resolve the deal first.
pub struct NotesService {
    repository: Arc<dyn NotesRepository>,
}

impl NotesService {
    pub fn new(repository: Arc<dyn NotesRepository>) -> Self {
        Self { repository }
    }

    /// Attach a note to `deal_id`.
    ///
    /// Author and content must be non-empty after trimming. The stored note
    /// keeps both exactly as given.
    pub async fn add_note(
        &self,
        deal_id: &DealId,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<DealNote> {
        let author = author.into();
        let content = content.into();
        if author.trim().is_empty() {
            return Err(DealDeskError::InvalidInput("note author must not be empty".into()));
        }
        if content.trim().is_empty() {
            return Err(DealDeskError::InvalidInput("note content must not be empty".into()));
        }

        let note = DealNote {
            id: Uuid::now_v7(),
            deal_id: *deal_id,
            author,
            content,
            created_at: Utc::now(),
        };
        self.repository.add(note.clone()).await?;

        info!(deal_id = %deal_id, note_id = %note.id, "Note added");
        Ok(note)
    }

    /// Notes on `deal_id`, newest first
    pub async fn list_notes(&self, deal_id: &DealId) -> Result<Vec<DealNote>> {
        self.repository.list_for_deal(deal_id).await
    }
}
