//! Tracing setup and structured operation logging

use std::future::Future;
use std::time::{Duration, Instant};

use dealdesk_domain::LoggingConfig;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ApiResult;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. Call once, at startup.
///
/// # Errors
/// Fails if the level is not a valid filter directive or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }
    Ok(())
}

/// Log the outcome of an API operation with structured fields.
///
/// `operation` is a stable identifier such as `"deals::create"`; callers
/// must not put request data in it.
#[inline]
pub fn log_operation(operation: &str, elapsed: Duration, error: Option<&'static str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(operation, duration_ms, success = true, "operation_success"),
        Some(error) => {
            warn!(operation, duration_ms, success = false, error, "operation_failure");
        }
    }
}

/// Run `fut` and log its outcome under `operation`.
pub async fn timed<T, F>(operation: &'static str, fut: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
{
    let start = Instant::now();
    let result = fut.await;
    log_operation(operation, start.elapsed(), result.as_ref().err().map(|err| err.code()));
    result
}
