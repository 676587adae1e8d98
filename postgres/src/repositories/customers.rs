// storefront-postgres/src/repositories/customers.rs

use crate::error::db_error;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use storefront::{Customer, CustomersRepository, NewCustomer, StoreResult};
use tracing::instrument;
use uuid::Uuid;

pub(crate) fn customer_from_row(row: &PgRow) -> Result<Customer, sqlx::Error> {
  Ok(Customer {
    id: row.try_get("id")?,
    name: row.try_get("name")?,
    email: row.try_get("email")?,
    created_at: row.try_get("created_at")?,
    updated_at: row.try_get("updated_at")?,
  })
}

#[derive(Clone)]
pub struct PgCustomersRepository {
  pool: PgPool,
}

impl PgCustomersRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CustomersRepository for PgCustomersRepository {
  #[instrument(name = "PgCustomersRepository::find_by_id", skip(self))]
  async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
    let row = sqlx::query(
      r#"SELECT id, name, email, created_at, updated_at
         FROM customers
         WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(db_error)?;

    row.as_ref().map(customer_from_row).transpose().map_err(db_error)
  }

  #[instrument(name = "PgCustomersRepository::find_by_email", skip_all)]
  async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
    let row = sqlx::query(
      r#"SELECT id, name, email, created_at, updated_at
         FROM customers
         WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await
    .map_err(db_error)?;

    row.as_ref().map(customer_from_row).transpose().map_err(db_error)
  }

  #[instrument(name = "PgCustomersRepository::create", skip_all)]
  async fn create(&self, data: NewCustomer) -> StoreResult<Customer> {
    let now = Utc::now();
    let row = sqlx::query(
      r#"INSERT INTO customers (id, name, email, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $4)
         RETURNING id, name, email, created_at, updated_at"#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(&data.email)
    .bind(now)
    .fetch_one(&self.pool)
    .await
    .map_err(db_error)?;

    customer_from_row(&row).map_err(db_error)
  }
}
