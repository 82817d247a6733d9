//! # DealDesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for deal and note storage
//! - The deal store and notes services
//! - Aggregate derivations over deal snapshots
//! - Input validation applied at the request boundary
//!
//! ## Architecture Principles
//! - Only depends on `dealdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod deals;
pub mod notes;

// Re-export specific items to avoid ambiguity
pub use deals::ports::DealRepository;
pub use deals::validation::{validate_create_deal, FieldError, ValidationError, ValidationResult};
pub use deals::DealStore;
pub use notes::ports::NotesRepository;
pub use notes::NotesService;
