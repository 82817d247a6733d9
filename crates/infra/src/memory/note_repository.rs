//! In-memory implementation of `NotesRepository`

use async_trait::async_trait;
use dealdesk_core::NotesRepository;
use dealdesk_domain::{DealId, DealNote, Result as DomainResult};
use parking_lot::RwLock;

/// Notes kept newest first.
#[derive(Debug, Default)]
pub struct InMemoryNotesRepository {
    notes: RwLock<Vec<DealNote>>,
}

impl InMemoryNotesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotesRepository for InMemoryNotesRepository {
    async fn add(&self, note: DealNote) -> DomainResult<()> {
        self.notes.write().insert(0, note);
        Ok(())
    }

    async fn list_for_deal(&self, deal_id: &DealId) -> DomainResult<Vec<DealNote>> {
        Ok(self.notes.read().iter().filter(|note| note.deal_id == *deal_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use dealdesk_domain::DealId;
    use uuid::Uuid;

    use super::*;

    fn note(deal_id: DealId, content: &str) -> DealNote {
        DealNote {
            id: Uuid::now_v7(),
            deal_id,
            author: "Sarah".into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn newest_note_comes_first() {
        let repo = InMemoryNotesRepository::new();
        let deal = DealId::new();
        let other = DealId::new();

        repo.add(note(deal, "first")).await.unwrap();
        repo.add(note(other, "elsewhere")).await.unwrap();
        repo.add(note(deal, "second")).await.unwrap();

        let notes = repo.list_for_deal(&deal).await.unwrap();
        let contents: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, ["second", "first"]);
    }
}
