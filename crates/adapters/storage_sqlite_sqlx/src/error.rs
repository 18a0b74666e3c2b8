//! Storage-specific error type wrapping sqlx errors.

use std::num::TryFromIntError;

use hostel_domain::error::HostelError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored count or capacity does not fit the domain type.
    #[error("stored value out of range")]
    OutOfRange(#[from] TryFromIntError),
}

impl From<StorageError> for HostelError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Convert a stored integer column into a `u32`, failing the row decode
/// when it does not fit.
pub(crate) fn decode_u32(value: i64) -> Result<u32, sqlx::Error> {
    u32::try_from(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
