//! Input validation for deal creation
//!
//! Runs at the request boundary, before the store is called. The store itself
//! accepts any `CreateDealInput`; keeping the two apart means a caller that
//! skips validation (tests, imports) still gets a faithful copy of its input.

use std::fmt;

use dealdesk_domain::constants::EMAIL_PATTERN;
use dealdesk_domain::CreateDealInput;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field (camelCase)
    pub field: String,
    pub message: String,
}

/// Validation error with every field-level error found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new, empty validation error
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError { field: field.into(), message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether `field` has at least one error
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Check a creation request the way the dashboard form does.
///
/// Collects every failing field instead of stopping at the first one.
pub fn validate_create_deal(input: &CreateDealInput) -> ValidationResult<()> {
    let mut errors = ValidationError::new();

    if input.client_name.trim().is_empty() {
        errors.add_field_error("clientName", "Client name is required");
    }

    if input.iban.trim().is_empty() {
        errors.add_field_error("iban", "IBAN is required");
    }

    if input.contact_email.trim().is_empty() {
        errors.add_field_error("contactEmail", "Contact email is required");
    } else if !EMAIL_REGEX.is_match(&input.contact_email) {
        errors.add_field_error("contactEmail", "Please enter a valid email address");
    }

    if !input.deal_amount.is_positive() {
        errors.add_field_error("dealAmount", "Deal amount must be greater than 0");
    }

    if input.marketing_services.is_empty() {
        errors.add_field_error("marketingServices", "Select at least one marketing service");
    }

    errors.into_result()
}
