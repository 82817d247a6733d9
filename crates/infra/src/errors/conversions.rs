//! Conversions from external infrastructure errors into domain errors.

use dealdesk_domain::DealDeskError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DealDeskError);

impl From<InfraError> for DealDeskError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DealDeskError> for InfraError {
    fn from(value: DealDeskError) -> Self {
        InfraError(value)
    }
}

impl From<tokio::task::JoinError> for InfraError {
    fn from(value: tokio::task::JoinError) -> Self {
        if value.is_cancelled() {
            InfraError(DealDeskError::Internal("blocking task cancelled".into()))
        } else {
            InfraError(DealDeskError::Internal(format!("blocking task failed: {value}")))
        }
    }
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → DealDeskError */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for InfraError {
    fn from(value: rusqlite::Error) -> Self {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        let mapped = match value {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        DealDeskError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        DealDeskError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        DealDeskError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::NotADatabase, _) => {
                        DealDeskError::Database("file is not a sqlite database".into())
                    }
                    _ => DealDeskError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => DealDeskError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(column, _, cause) => DealDeskError::Database(format!(
                "failed to convert sqlite value in column {column}: {cause}"
            )),
            RE::InvalidColumnType(_, name, ty) => {
                DealDeskError::Database(format!("invalid column type for '{name}': {ty}"))
            }
            RE::InvalidPath(path) => DealDeskError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => DealDeskError::Database(other.to_string()),
        };
        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → DealDeskError */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(DealDeskError::Database(format!("connection pool error: {value}")))
    }
}
