//! # DealDesk Domain
//!
//! Business domain types and models for DealDesk.
//!
//! This crate contains:
//! - Deal records and their creation input
//! - Derived client and pipeline rollups
//! - Session-scoped deal notes
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other DealDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
