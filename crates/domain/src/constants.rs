//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Server defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// Storage defaults
pub const DEFAULT_DB_PATH: &str = "dealdesk.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Shape check applied to contact emails at the input boundary.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
