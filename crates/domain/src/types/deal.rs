//! Deal records
//!
//! A deal is the only stored entity. Everything else (clients, pipeline
//! totals) is derived from a snapshot of deals.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::errors::DealDeskError;
use crate::impl_domain_status_conversions;

/// Opaque deal identifier (UUIDv7, so ids sort by creation time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(Uuid);

impl DealId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DealId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DealId {
    type Err = DealDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DealDeskError::InvalidInput(format!("invalid deal id '{s}': {e}")))
    }
}

/// Monetary amount of a deal, in US dollars.
///
/// Never negative: construction and deserialization both reject negative
/// values. Zero is representable; requiring a positive amount is a boundary
/// validation rule, not a type invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DealAmount(Decimal);

impl DealAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, DealDeskError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DealDeskError::InvalidInput(format!(
                "deal amount must not be negative (got {value})"
            )));
        }
        Ok(Self(value.normalize()))
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Exact sum of two amounts, or `None` if it exceeds the decimal range.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(|sum| Self(sum.normalize()))
    }
}

impl TryFrom<Decimal> for DealAmount {
    type Error = DealDeskError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DealAmount> for Decimal {
    fn from(value: DealAmount) -> Self {
        value.0
    }
}

impl From<u32> for DealAmount {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for DealAmount {
    type Err = DealDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| DealDeskError::InvalidInput(format!("invalid deal amount '{s}': {e}")))?;
        Self::new(value)
    }
}

impl fmt::Display for DealAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pipeline phase of a deal.
///
/// Any stage may follow any other; moving backwards from `Finished` is
/// allowed and there is no terminal lock.
///
/// Serializes as snake_case. Deserializes through [`FromStr`], so the
/// dashboard labels (`"Technical Department"`) are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum DealStage {
    /// Intake stage; new deals start here unless told otherwise
    #[default]
    FinancialDepartment,
    TechnicalDepartment,
    Finished,
}

impl_domain_status_conversions!(DealStage {
    FinancialDepartment => "financial_department",
    TechnicalDepartment => "technical_department",
    Finished => "finished",
});

impl TryFrom<String> for DealStage {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl DealStage {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 3] = [Self::FinancialDepartment, Self::TechnicalDepartment, Self::Finished];

    /// Human-readable label as shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FinancialDepartment => "Financial Department",
            Self::TechnicalDepartment => "Technical Department",
            Self::Finished => "Finished",
        }
    }
}

/// Marketing service a deal bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum MarketingService {
    Hungerstation,
    Keeta,
    TheChefz,
}

impl_domain_status_conversions!(MarketingService {
    Hungerstation => "hungerstation",
    Keeta => "keeta",
    TheChefz => "the_chefz",
});

/// Input for creating a deal.
///
/// `Default` mirrors an empty creation form: blank strings, zero amount,
/// intake stage, no services selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CreateDealInput {
    pub client_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub iban: String,
    pub cr_number: String,
    pub payment_notes: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string | number"))]
    pub deal_amount: DealAmount,
    pub stage: DealStage,
    pub deal_description: String,
    pub marketing_services: BTreeSet<MarketingService>,
}

/// A stored deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Deal {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub id: DealId,
    pub client_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub iban: String,
    pub cr_number: String,
    pub payment_notes: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub deal_amount: DealAmount,
    pub stage: DealStage,
    pub deal_description: String,
    pub marketing_services: BTreeSet<MarketingService>,
    pub created_date: DateTime<Utc>,
}

impl Deal {
    /// Build a deal by copying every input field and stamping identity and
    /// creation time.
    pub fn from_input(id: DealId, input: CreateDealInput, created_date: DateTime<Utc>) -> Self {
        let CreateDealInput {
            client_name,
            contact_email,
            contact_phone,
            iban,
            cr_number,
            payment_notes,
            deal_amount,
            stage,
            deal_description,
            marketing_services,
        } = input;

        Self {
            id,
            client_name,
            contact_email,
            contact_phone,
            iban,
            cr_number,
            payment_notes,
            deal_amount,
            stage,
            deal_description,
            marketing_services,
            created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn negative_amount_is_rejected() {
        let err = DealAmount::new(Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, DealDeskError::InvalidInput(_)));
    }

    #[test]
    fn zero_amount_is_representable() {
        let zero = DealAmount::new(Decimal::ZERO).unwrap();
        assert_eq!(zero, DealAmount::ZERO);
        assert!(!zero.is_positive());
    }

    #[test]
    fn amount_deserializes_from_number_or_string() {
        let from_number: DealAmount = serde_json::from_str("125000").unwrap();
        let from_string: DealAmount = serde_json::from_str("\"125000.00\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<DealAmount>("-5").is_err());
    }

    #[test]
    fn amounts_sum_exactly() {
        let total = ["0.10", "0.20", "0.30"]
            .iter()
            .map(|s| s.parse::<DealAmount>().unwrap())
            .try_fold(DealAmount::ZERO, DealAmount::checked_add)
            .unwrap();
        assert_eq!(total, "0.6".parse::<DealAmount>().unwrap());
        assert_eq!(total.to_string(), "0.6");
    }

    #[test]
    fn checked_add_reports_overflow() {
        let max = DealAmount::new(Decimal::MAX).unwrap();
        assert!(max.checked_add(DealAmount::from(1)).is_none());
        assert_eq!(DealAmount::ZERO.checked_add(max), Some(max));
    }

    #[test]
    fn stage_wire_format_and_labels() {
        assert_eq!(serde_json::to_string(&DealStage::TechnicalDepartment).unwrap(), "\"technical_department\"");
        assert_eq!("Financial Department".parse::<DealStage>().unwrap(), DealStage::FinancialDepartment);
        assert_eq!(DealStage::Finished.label(), "Finished");
        assert_eq!(DealStage::default(), DealStage::FinancialDepartment);
    }

    #[test]
    fn stage_deserializes_from_wire_form_or_label() {
        let from_wire: DealStage = serde_json::from_str("\"technical_department\"").unwrap();
        let from_label: DealStage = serde_json::from_str("\"Technical Department\"").unwrap();
        assert_eq!(from_wire, DealStage::TechnicalDepartment);
        assert_eq!(from_label, DealStage::TechnicalDepartment);

        let err = serde_json::from_str::<DealStage>("\"archived\"").unwrap_err();
        assert!(err.to_string().contains("Invalid DealStage: archived"));
    }

    #[test]
    fn deal_id_round_trips_through_string() {
        let id = DealId::new();
        let parsed: DealId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<DealId>().is_err());
    }

    #[test]
    fn from_input_copies_every_field() {
        let input = CreateDealInput {
            client_name: "Acme Corporation".into(),
            contact_email: "john.doe@acme.com".into(),
            contact_phone: "+1-555-0123".into(),
            iban: "GB29 NWBK 6016 1331 9268 19".into(),
            cr_number: "CR-1010".into(),
            payment_notes: "Net 30 payment terms".into(),
            deal_amount: DealAmount::from(125_000),
            stage: DealStage::TechnicalDepartment,
            deal_description: "Enterprise licensing".into(),
            marketing_services: [MarketingService::Keeta].into_iter().collect(),
        };
        let id = DealId::new();
        let now = Utc::now();

        let deal = Deal::from_input(id, input.clone(), now);

        assert_eq!(deal.id, id);
        assert_eq!(deal.created_date, now);
        assert_eq!(deal.client_name, input.client_name);
        assert_eq!(deal.iban, input.iban);
        assert_eq!(deal.cr_number, input.cr_number);
        assert_eq!(deal.deal_amount, input.deal_amount);
        assert_eq!(deal.stage, input.stage);
        assert_eq!(deal.marketing_services, input.marketing_services);
    }
}
