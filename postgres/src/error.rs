// storefront-postgres/src/error.rs

use storefront::StoreError;
use thiserror::Error;

/// Failures while configuring or connecting, before any repository is in use.
#[derive(Debug, Error)]
pub enum SetupError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Connection Error: {0}")]
  Connect(#[from] sqlx::Error),
}

/// Repository-level database failures travel through the services as
/// `StoreError::Repository`, with the `sqlx::Error` kept as the source.
pub(crate) fn db_error(err: sqlx::Error) -> StoreError {
  tracing::error!(error = %err, "Database operation failed.");
  StoreError::repository(err)
}
