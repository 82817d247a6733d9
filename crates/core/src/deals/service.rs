//! Deal store - core business logic

use std::sync::Arc;

use chrono::Utc;
use dealdesk_domain::{
    ClientAggregate, ClientSummary, CreateDealInput, Deal, DealId, DealStage, PipelineSummary,
    Result,
};
use tracing::{debug, info};

use super::aggregate;
use super::ports::DealRepository;

/// Owns the collection of deals behind a [`DealRepository`].
///
/// The store performs no validation. Whatever input it is handed is stored
/// verbatim; boundary checks live in [`super::validation`].
pub struct DealStore {
    repository: Arc<dyn DealRepository>,
}

impl DealStore {
    /// Create a new store over `repository`
    pub fn new(repository: Arc<dyn DealRepository>) -> Self {
        Self { repository }
    }

    /// All deals in insertion order
    pub async fn list_deals(&self) -> Result<Vec<Deal>> {
        self.repository.list().await
    }

    /// Look up one deal
    pub async fn get_deal(&self, id: &DealId) -> Result<Option<Deal>> {
        self.repository.get(id).await
    }

    /// Mint an id and creation timestamp, then append the deal.
    pub async fn create_deal(&self, input: CreateDealInput) -> Result<Deal> {
        let deal = Deal::from_input(DealId::new(), input, Utc::now());
        self.repository.insert(deal.clone()).await?;

        info!(
            deal_id = %deal.id,
            stage = %deal.stage,
            amount = %deal.deal_amount,
            "Deal created"
        );
        Ok(deal)
    }

    /// Move a deal to `stage`.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub async fn update_stage(&self, id: &DealId, stage: DealStage) -> Result<bool> {
        let updated = self.repository.set_stage(id, stage).await?;
        if updated {
            info!(deal_id = %id, stage = %stage, "Deal stage updated");
        } else {
            debug!(deal_id = %id, "Stage update ignored for unknown deal");
        }
        Ok(updated)
    }

    /// Per-client counts and totals, in order of first appearance
    pub async fn list_clients_aggregate(&self) -> Result<Vec<ClientAggregate>> {
        let deals = self.repository.list().await?;
        aggregate::group_by_client(&deals)
    }

    /// Deals for one client (exact name match); empty for unknown names
    pub async fn list_deals_for_client(&self, client_name: &str) -> Result<Vec<Deal>> {
        self.repository.list_by_client(client_name).await
    }

    /// Detail rollup for one client
    pub async fn client_summary(&self, client_name: &str) -> Result<Option<ClientSummary>> {
        let deals = self.repository.list_by_client(client_name).await?;
        aggregate::summarize_client(client_name, &deals)
    }

    /// Per-stage counts and totals over the whole pipeline
    pub async fn pipeline_summary(&self) -> Result<PipelineSummary> {
        let deals = self.repository.list().await?;
        aggregate::summarize_pipeline(&deals)
    }

    /// Probe the backing repository
    pub async fn health_check(&self) -> Result<()> {
        self.repository.health_check().await
    }
}
