//! Mock repository implementations for testing
//!
//! In-memory mocks for the core repository ports. They share state through
//! `Arc<Mutex<..>>` so a test can keep a handle and inspect what the service
//! wrote.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dealdesk_core::{DealRepository, NotesRepository};
use dealdesk_domain::{Deal, DealDeskError, DealId, DealNote, DealStage, Result as DomainResult};

/// In-memory mock for `DealRepository`.
#[derive(Default, Clone)]
pub struct MockDealRepository {
    deals: Arc<Mutex<Vec<Deal>>>,
    fail_health: bool,
}

impl MockDealRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose health check always fails.
    pub fn unhealthy() -> Self {
        Self { fail_health: true, ..Self::default() }
    }

    /// Snapshot of what has been stored so far.
    pub fn stored(&self) -> Vec<Deal> {
        self.deals.lock().unwrap().clone()
    }
}

#[async_trait]
impl DealRepository for MockDealRepository {
    async fn list(&self) -> DomainResult<Vec<Deal>> {
        Ok(self.deals.lock().unwrap().clone())
    }

    async fn get(&self, id: &DealId) -> DomainResult<Option<Deal>> {
        Ok(self.deals.lock().unwrap().iter().find(|deal| deal.id == *id).cloned())
    }

    async fn insert(&self, deal: Deal) -> DomainResult<()> {
        self.deals.lock().unwrap().push(deal);
        Ok(())
    }

    async fn set_stage(&self, id: &DealId, stage: DealStage) -> DomainResult<bool> {
        let mut deals = self.deals.lock().unwrap();
        match deals.iter_mut().find(|deal| deal.id == *id) {
            Some(deal) => {
                deal.stage = stage;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_by_client(&self, client_name: &str) -> DomainResult<Vec<Deal>> {
        Ok(self
            .deals
            .lock()
            .unwrap()
            .iter()
            .filter(|deal| deal.client_name == client_name)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> DomainResult<()> {
        if self.fail_health {
            return Err(DealDeskError::Database("mock storage offline".into()));
        }
        Ok(())
    }
}

/// In-memory mock for `NotesRepository`.
#[derive(Default, Clone)]
pub struct MockNotesRepository {
    notes: Arc<Mutex<Vec<DealNote>>>,
}

impl MockNotesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }
}

#[async_trait]
impl NotesRepository for MockNotesRepository {
    async fn add(&self, note: DealNote) -> DomainResult<()> {
        self.notes.lock().unwrap().push(note);
        Ok(())
    }

    async fn list_for_deal(&self, deal_id: &DealId) -> DomainResult<Vec<DealNote>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|note| note.deal_id == *deal_id)
            .cloned()
            .collect())
    }
}
