//! In-memory implementation of `DealRepository`

use async_trait::async_trait;
use dealdesk_core::DealRepository;
use dealdesk_domain::{Deal, DealId, DealStage, Result as DomainResult};
use parking_lot::RwLock;

/// Deals held in an insertion-ordered list.
///
/// Every operation takes the lock once and releases it before returning, so
/// each call is atomic with respect to the others. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryDealRepository {
    deals: RwLock<Vec<Deal>>,
}

impl InMemoryDealRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `deals` already stored, in the given order.
    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self { deals: RwLock::new(deals) }
    }

    pub fn len(&self) -> usize {
        self.deals.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.read().is_empty()
    }
}

#[async_trait]
impl DealRepository for InMemoryDealRepository {
    async fn list(&self) -> DomainResult<Vec<Deal>> {
        Ok(self.deals.read().clone())
    }

    async fn get(&self, id: &DealId) -> DomainResult<Option<Deal>> {
        Ok(self.deals.read().iter().find(|deal| deal.id == *id).cloned())
    }

    async fn insert(&self, deal: Deal) -> DomainResult<()> {
        self.deals.write().push(deal);
        Ok(())
    }

    async fn set_stage(&self, id: &DealId, stage: DealStage) -> DomainResult<bool> {
        let mut deals = self.deals.write();
        let Some(deal) = deals.iter_mut().find(|deal| deal.id == *id) else {
            return Ok(false);
        };
        deal.stage = stage;
        Ok(true)
    }

    async fn list_by_client(&self, client_name: &str) -> DomainResult<Vec<Deal>> {
        Ok(self
            .deals
            .read()
            .iter()
            .filter(|deal| deal.client_name == client_name)
            .cloned()
            .collect())
    }
}
