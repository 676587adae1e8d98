// storefront-postgres/src/repositories/products.rs

use crate::error::db_error;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use storefront::{NewProduct, Product, ProductsRepository, StockUpdate, StoreResult};
use tracing::{debug, instrument};
use uuid::Uuid;

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
  Ok(Product {
    id: row.try_get("id")?,
    name: row.try_get("name")?,
    price: row.try_get("price")?,
    quantity: row.try_get("quantity")?,
    created_at: row.try_get("created_at")?,
    updated_at: row.try_get("updated_at")?,
  })
}

#[derive(Clone)]
pub struct PgProductsRepository {
  pool: PgPool,
}

impl PgProductsRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
  #[instrument(name = "PgProductsRepository::find_all_by_id", skip_all, fields(requested = ids.len()))]
  async fn find_all_by_id(&self, ids: &[Uuid]) -> StoreResult<Vec<Product>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }

    let rows = sqlx::query(
      r#"SELECT id, name, price, quantity, created_at, updated_at
         FROM products
         WHERE id = ANY($1)"#,
    )
    .bind(ids.to_vec())
    .fetch_all(&self.pool)
    .await
    .map_err(db_error)?;

    debug!(found = rows.len(), "Fetched products by id.");
    rows.iter().map(product_from_row).collect::<Result<_, _>>().map_err(db_error)
  }

  #[instrument(name = "PgProductsRepository::find_by_name", skip(self))]
  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
    let row = sqlx::query(
      r#"SELECT id, name, price, quantity, created_at, updated_at
         FROM products
         WHERE name = $1"#,
    )
    .bind(name)
    .fetch_optional(&self.pool)
    .await
    .map_err(db_error)?;

    row.as_ref().map(product_from_row).transpose().map_err(db_error)
  }

  #[instrument(name = "PgProductsRepository::create", skip(self, data), fields(name = %data.name))]
  async fn create(&self, data: NewProduct) -> StoreResult<Product> {
    let now = Utc::now();
    let row = sqlx::query(
      r#"INSERT INTO products (id, name, price, quantity, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $5)
         RETURNING id, name, price, quantity, created_at, updated_at"#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(data.price)
    .bind(data.quantity)
    .bind(now)
    .fetch_one(&self.pool)
    .await
    .map_err(db_error)?;

    product_from_row(&row).map_err(db_error)
  }

  /// All updates share one transaction: either every stock level moves or none does.
  #[instrument(name = "PgProductsRepository::update_quantity", skip_all, fields(updates = updates.len()))]
  async fn update_quantity(&self, updates: &[StockUpdate]) -> StoreResult<Vec<Product>> {
    let now = Utc::now();
    let mut tx = self.pool.begin().await.map_err(db_error)?;
    let mut updated = Vec::with_capacity(updates.len());

    for update in updates {
      let row = sqlx::query(
        r#"UPDATE products SET quantity = $1, updated_at = $2
           WHERE id = $3
           RETURNING id, name, price, quantity, created_at, updated_at"#,
      )
      .bind(update.quantity)
      .bind(now)
      .bind(update.id)
      .fetch_one(&mut *tx)
      .await
      .map_err(db_error)?;
      updated.push(product_from_row(&row).map_err(db_error)?);
    }

    tx.commit().await.map_err(db_error)?;
    Ok(updated)
  }
}
