//! Process-local repositories
//!
//! Default storage backend. Contents live only as long as the process.

mod deal_repository;
mod note_repository;

pub use deal_repository::InMemoryDealRepository;
pub use note_repository::InMemoryNotesRepository;
