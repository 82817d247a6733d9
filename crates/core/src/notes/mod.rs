//! Session-scoped deal notes

pub mod ports;
pub mod service;

pub use service::NotesService;
