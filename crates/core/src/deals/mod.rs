//! Deal store: ports, service, derivations and boundary validation

pub mod aggregate;
pub mod ports;
pub mod service;
pub mod validation;

pub use service::DealStore;
