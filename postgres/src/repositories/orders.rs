// storefront-postgres/src/repositories/orders.rs

use super::customers::customer_from_row;
use crate::error::db_error;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use storefront::{NewOrder, Order, OrderProduct, OrdersRepository, StoreError, StoreResult};
use tracing::{info, instrument};
use uuid::Uuid;

fn order_product_from_row(row: &PgRow) -> Result<OrderProduct, sqlx::Error> {
  Ok(OrderProduct {
    id: row.try_get("id")?,
    order_id: row.try_get("order_id")?,
    product_id: row.try_get("product_id")?,
    quantity: row.try_get("quantity")?,
    price: row.try_get("price")?,
    created_at: row.try_get("created_at")?,
    updated_at: row.try_get("updated_at")?,
  })
}

/// Builds an order from its joined order/customer row and its line rows, the
/// latter already sorted by `position`.
fn order_from_rows(order_row: &PgRow, line_rows: &[PgRow]) -> Result<Order, sqlx::Error> {
  Ok(Order {
    id: order_row.try_get("order_id")?,
    customer: customer_from_row(order_row)?,
    order_products: line_rows.iter().map(order_product_from_row).collect::<Result<_, _>>()?,
    created_at: order_row.try_get("order_created_at")?,
    updated_at: order_row.try_get("order_updated_at")?,
  })
}

#[derive(Clone)]
pub struct PgOrdersRepository {
  pool: PgPool,
}

impl PgOrdersRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
  /// Inserts the order row and its line items in a single transaction.
  #[instrument(
    name = "PgOrdersRepository::create",
    skip_all,
    fields(customer_id = %data.customer.id, lines = data.products.len())
  )]
  async fn create(&self, data: NewOrder) -> StoreResult<Order> {
    let now = Utc::now();
    let order_id = Uuid::new_v4();
    let mut tx = self.pool.begin().await.map_err(db_error)?;

    sqlx::query(
      r#"INSERT INTO orders (id, customer_id, created_at, updated_at)
         VALUES ($1, $2, $3, $3)"#,
    )
    .bind(order_id)
    .bind(data.customer.id)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(db_error)?;

    let mut order_products = Vec::with_capacity(data.products.len());
    for (position, line) in data.products.iter().enumerate() {
      let position = i32::try_from(position)
        .map_err(|_| StoreError::Validation(format!("Order has too many lines ({})", data.products.len())))?;
      let row = sqlx::query(
        r#"INSERT INTO orders_products (id, order_id, product_id, position, quantity, price, created_at, updated_at)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
           RETURNING id, order_id, product_id, quantity, price, created_at, updated_at"#,
      )
      .bind(Uuid::new_v4())
      .bind(order_id)
      .bind(line.product_id)
      .bind(position)
      .bind(line.quantity)
      .bind(line.price)
      .bind(now)
      .fetch_one(&mut *tx)
      .await
      .map_err(db_error)?;
      order_products.push(order_product_from_row(&row).map_err(db_error)?);
    }

    tx.commit().await.map_err(db_error)?;
    info!(%order_id, "Order rows committed.");

    Ok(Order {
      id: order_id,
      customer: data.customer,
      order_products,
      created_at: now,
      updated_at: now,
    })
  }

  #[instrument(name = "PgOrdersRepository::find_by_id", skip(self))]
  async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Order>> {
    let order_row = sqlx::query(
      r#"SELECT o.id AS order_id, o.created_at AS order_created_at, o.updated_at AS order_updated_at,
                c.id, c.name, c.email, c.created_at, c.updated_at
         FROM orders o
         JOIN customers c ON c.id = o.customer_id
         WHERE o.id = $1"#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(db_error)?;

    let Some(order_row) = order_row else {
      return Ok(None);
    };

    let line_rows = sqlx::query(
      r#"SELECT id, order_id, product_id, quantity, price, created_at, updated_at
         FROM orders_products
         WHERE order_id = $1
         ORDER BY position"#,
    )
    .bind(id)
    .fetch_all(&self.pool)
    .await
    .map_err(db_error)?;

    let order = order_from_rows(&order_row, &line_rows).map_err(db_error)?;

    Ok(Some(order))
  }
}
