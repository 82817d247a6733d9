//! Shared helpers for the API layer

pub mod logging;
