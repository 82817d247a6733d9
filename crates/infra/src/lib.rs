//! # DealDesk Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - In-memory deal and note repositories (default backend)
//! - SQLite deal repository and connection management (`sqlite` feature)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `dealdesk-core`
//! - Contains all "impure" code (I/O, file system, database)

pub mod config;
#[cfg(feature = "sqlite")]
pub mod database;
pub mod errors;
pub mod memory;

// Re-export commonly used items
#[cfg(feature = "sqlite")]
pub use database::{DbManager, SqliteDealRepository};
pub use errors::InfraError;
pub use memory::{InMemoryDealRepository, InMemoryNotesRepository};
