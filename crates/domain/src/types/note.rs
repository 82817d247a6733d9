//! Deal notes
//!
//! Free-text remarks attached to a deal. Notes are session-scoped and are not
//! part of the deal store's data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::deal::DealId;

/// A note left on a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DealNote {
    pub id: Uuid, // UUIDv7
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub deal_id: DealId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for adding a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NewNote {
    pub author: String,
    pub content: String,
}
