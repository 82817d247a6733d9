//! Domain types and models

pub mod client;
pub mod deal;
pub mod note;

pub use client::{ClientAggregate, ClientSummary, PipelineSummary, StageTotal};
pub use deal::{CreateDealInput, Deal, DealAmount, DealId, DealStage, MarketingService};
pub use note::{DealNote, NewNote};
