// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the workflow runner itself rather than by a step handler.
#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("Handler missing for step '{step_name}' in workflow '{workflow}'")]
  HandlerMissing { workflow: String, step_name: String },
}

/// The single application error surfaced by every store operation.
///
/// Each variant renders a human-readable message; callers (a transport layer,
/// a CLI) decide how to map them to user-facing responses.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
  InsufficientStock {
    product_id: Uuid,
    requested: i32,
    available: i32,
  },

  #[error("A product named '{0}' already exists")]
  DuplicateName(String),

  #[error("The e-mail '{0}' is already in use")]
  DuplicateEmail(String),

  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Repository Error: {0}")]
  Repository(#[from] AnyhowError),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: WorkflowError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl StoreError {
  /// Wraps any collaborator error so it travels through the services untouched.
  pub fn repository<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    StoreError::Repository(AnyhowError::new(err))
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
