// storefront-postgres/src/lib.rs

//! PostgreSQL backing for the storefront services.
//!
//! Expects the following tables to exist (schema management is out of scope):
//!
//! - `customers (id uuid, name text, email text unique, created_at timestamptz, updated_at timestamptz)`
//! - `products (id uuid, name text unique, price numeric, quantity integer, created_at, updated_at)`
//! - `orders (id uuid, customer_id uuid references customers, created_at, updated_at)`
//! - `orders_products (id uuid, order_id uuid references orders, product_id uuid references products,
//!   position integer, quantity integer, price numeric, created_at, updated_at)`

pub mod config;
pub mod error;
pub mod repositories;

pub use config::PgStoreConfig;
pub use error::SetupError;
pub use repositories::{PgCustomersRepository, PgOrdersRepository, PgProductsRepository};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use storefront::Storefront;

/// Opens a pool according to `config`.
pub async fn connect_pool(config: &PgStoreConfig) -> Result<PgPool, SetupError> {
  let pool = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(config.acquire_timeout)
    .connect(&config.database_url)
    .await
    .map_err(|e| {
      tracing::error!(error = %e, "Failed to connect to the database.");
      SetupError::Connect(e)
    })?;
  tracing::info!("Successfully connected to the database.");
  Ok(pool)
}

/// Builds a `Storefront` whose repositories all share `pool`.
pub fn storefront_from_pool(pool: PgPool) -> Storefront {
  Storefront::new(
    Arc::new(PgCustomersRepository::new(pool.clone())),
    Arc::new(PgProductsRepository::new(pool.clone())),
    Arc::new(PgOrdersRepository::new(pool)),
  )
}

/// Loads configuration from the environment, connects, and wires the services.
pub async fn connect_from_env() -> Result<Storefront, SetupError> {
  let config = PgStoreConfig::from_env()?;
  let pool = connect_pool(&config).await?;
  Ok(storefront_from_pool(pool))
}
