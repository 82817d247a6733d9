//! SQLite-backed storage

pub mod deal_repository;
pub mod manager;

pub use deal_repository::SqliteDealRepository;
pub use manager::DbManager;
