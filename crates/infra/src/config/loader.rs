//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If a required variable is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Falls back to built-in defaults when no file is found
//!
//! JSON and TOML files are supported.
//!
//! ## Environment Variables
//! - `DEALDESK_BIND_ADDR`: HTTP listen address (required)
//! - `DEALDESK_STORAGE_BACKEND`: `memory` or `sqlite` (required)
//! - `DEALDESK_DB_PATH`: SQLite file path
//! - `DEALDESK_DB_POOL_SIZE`: Connection pool size
//! - `DEALDESK_LOG_LEVEL`: Default log filter
//! - `DEALDESK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./dealdesk.json` or `./dealdesk.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use dealdesk_domain::{
    Config, DealDeskError, LoggingConfig, Result, ServerConfig, StorageBackend, StorageConfig,
};

/// Load configuration from the environment, then the first config file
/// found, then built-in defaults.
///
/// Only a missing required variable moves on to the next source. An invalid
/// environment value, or a config file that exists but cannot be parsed, is
/// an error.
///
/// # Errors
/// Returns `DealDeskError::Config` for invalid environment values or an
/// invalid config file.
pub fn load_or_default() -> Result<Config> {
    match load_from_env() {
        Ok(config) => return Ok(config),
        Err(e) if is_missing_var(&e) => {
            tracing::debug!(error = %e, "Environment configuration incomplete");
        }
        Err(e) => return Err(e),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Both required variables must be present; optional ones fall back to
/// defaults.
///
/// # Errors
/// Returns `DealDeskError::Config` if required variables are missing
/// or any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let bind_addr = env_var("DEALDESK_BIND_ADDR")?;
    let backend = env_var("DEALDESK_STORAGE_BACKEND")?
        .parse::<StorageBackend>()
        .map_err(|e| DealDeskError::Config(format!("Invalid storage backend: {e}")))?;

    let storage_defaults = StorageConfig::default();
    let path = std::env::var("DEALDESK_DB_PATH").unwrap_or(storage_defaults.path);
    let pool_size = match std::env::var("DEALDESK_DB_POOL_SIZE") {
        Ok(s) => s
            .parse::<u32>()
            .map_err(|e| DealDeskError::Config(format!("Invalid pool size: {e}")))?,
        Err(_) => storage_defaults.pool_size,
    };

    let logging_defaults = LoggingConfig::default();
    let level = std::env::var("DEALDESK_LOG_LEVEL").unwrap_or(logging_defaults.level);
    let json = env_bool("DEALDESK_LOG_JSON", logging_defaults.json);

    Ok(Config {
        server: ServerConfig { bind_addr },
        storage: StorageConfig { backend, path, pool_size },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields left out of the file take their defaults.
///
/// # Errors
/// Returns `DealDeskError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DealDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DealDeskError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DealDeskError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DealDeskError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DealDeskError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DealDeskError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./dealdesk.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("dealdesk.json"),
        dir.join("dealdesk.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DealDeskError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn is_missing_var(err: &DealDeskError) -> bool {
    matches!(err, DealDeskError::Config(message) if message.starts_with("Missing required"))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
