//! Derived rollups
//!
//! None of these are stored. They are recomputed from a deal snapshot on
//! every request.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::deal::{DealAmount, DealStage};

/// Per-client count and amount.
///
/// A "client" is every deal sharing an identical `client_name`. Matching is
/// exact and case-sensitive: `"Acme"` and `"acme"` are two clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ClientAggregate {
    pub name: String,
    pub total_deals: usize,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_amount: DealAmount,
}

/// Client detail rollup: totals plus what has already been paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ClientSummary {
    pub name: String,
    pub total_deals: usize,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_amount: DealAmount,
    pub finished_deals: usize,
    /// Sum of amounts of deals in the `Finished` stage
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_paid: DealAmount,
}

/// Count and amount of the deals currently in one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StageTotal {
    pub stage: DealStage,
    pub deals: usize,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub amount: DealAmount,
}

/// Whole-pipeline rollup. `stages` lists every stage in pipeline order,
/// empty stages included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PipelineSummary {
    pub total_deals: usize,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_amount: DealAmount,
    pub stages: Vec<StageTotal>,
}
