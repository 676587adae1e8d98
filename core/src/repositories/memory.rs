// storefront/src/repositories/memory.rs

//! Process-local repositories backed by `parking_lot::RwLock`.
//!
//! Used by the tests, the benchmark and the demo; also a reasonable default for
//! any embedding that does not need durable storage. No guard is ever held across
//! an `.await`.

use super::{CustomersRepository, OrdersRepository, ProductsRepository};
use crate::error::{StoreError, StoreResult};
use crate::models::{Customer, NewCustomer, NewOrder, NewProduct, Order, OrderProduct, Product, StockUpdate};
use crate::services::Storefront;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryCustomers {
  rows: RwLock<Vec<Customer>>,
}

impl InMemoryCustomers {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores a new customer synchronously; handy for seeding fixtures.
  pub fn insert(&self, data: NewCustomer) -> Customer {
    let now = Utc::now();
    let customer = Customer {
      id: Uuid::new_v4(),
      name: data.name,
      email: data.email,
      created_at: now,
      updated_at: now,
    };
    self.rows.write().push(customer.clone());
    customer
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }
}

#[async_trait]
impl CustomersRepository for InMemoryCustomers {
  async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
    Ok(self.rows.read().iter().find(|c| c.id == id).cloned())
  }

  async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
    Ok(self.rows.read().iter().find(|c| c.email == email).cloned())
  }

  async fn create(&self, data: NewCustomer) -> StoreResult<Customer> {
    Ok(self.insert(data))
  }
}

#[derive(Debug, Default)]
pub struct InMemoryProducts {
  rows: RwLock<Vec<Product>>,
}

impl InMemoryProducts {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&self, data: NewProduct) -> Product {
    let now = Utc::now();
    let product = Product {
      id: Uuid::new_v4(),
      name: data.name,
      price: data.price,
      quantity: data.quantity,
      created_at: now,
      updated_at: now,
    };
    self.rows.write().push(product.clone());
    product
  }

  pub fn get(&self, id: Uuid) -> Option<Product> {
    self.rows.read().iter().find(|p| p.id == id).cloned()
  }

  pub fn all(&self) -> Vec<Product> {
    self.rows.read().clone()
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }
}

#[async_trait]
impl ProductsRepository for InMemoryProducts {
  async fn find_all_by_id(&self, ids: &[Uuid]) -> StoreResult<Vec<Product>> {
    let rows = self.rows.read();
    Ok(rows.iter().filter(|p| ids.contains(&p.id)).cloned().collect())
  }

  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
    Ok(self.rows.read().iter().find(|p| p.name == name).cloned())
  }

  async fn create(&self, data: NewProduct) -> StoreResult<Product> {
    Ok(self.insert(data))
  }

  #[instrument(name = "InMemoryProducts::update_quantity", skip_all, fields(updates = updates.len()))]
  async fn update_quantity(&self, updates: &[StockUpdate]) -> StoreResult<Vec<Product>> {
    let mut rows = self.rows.write();

    // All or nothing: resolve every id before touching any row.
    let mut positions = Vec::with_capacity(updates.len());
    for update in updates {
      let idx = rows
        .iter()
        .position(|p| p.id == update.id)
        .ok_or_else(|| StoreError::NotFound(format!("Product {} not found", update.id)))?;
      positions.push(idx);
    }

    let now = Utc::now();
    let mut updated = Vec::with_capacity(updates.len());
    for (idx, update) in positions.into_iter().zip(updates) {
      let product = &mut rows[idx];
      debug!(product_id = %product.id, from = product.quantity, to = update.quantity, "Updating stock.");
      product.quantity = update.quantity;
      product.updated_at = now;
      updated.push(product.clone());
    }
    Ok(updated)
  }
}

#[derive(Debug, Default)]
pub struct InMemoryOrders {
  rows: RwLock<Vec<Order>>,
}

impl InMemoryOrders {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn all(&self) -> Vec<Order> {
    self.rows.read().clone()
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }
}

#[async_trait]
impl OrdersRepository for InMemoryOrders {
  async fn create(&self, data: NewOrder) -> StoreResult<Order> {
    let now = Utc::now();
    let order_id = Uuid::new_v4();
    let order_products = data
      .products
      .into_iter()
      .map(|line| OrderProduct {
        id: Uuid::new_v4(),
        order_id,
        product_id: line.product_id,
        quantity: line.quantity,
        price: line.price,
        created_at: now,
        updated_at: now,
      })
      .collect();

    let order = Order {
      id: order_id,
      customer: data.customer,
      order_products,
      created_at: now,
      updated_at: now,
    };
    self.rows.write().push(order.clone());
    Ok(order)
  }

  async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Order>> {
    Ok(self.rows.read().iter().find(|o| o.id == id).cloned())
  }
}

/// The three in-memory repositories bundled together.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
  pub customers: Arc<InMemoryCustomers>,
  pub products: Arc<InMemoryProducts>,
  pub orders: Arc<InMemoryOrders>,
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// A `Storefront` whose services read and write these repositories.
  pub fn storefront(&self) -> Storefront {
    Storefront::new(self.customers.clone(), self.products.clone(), self.orders.clone())
  }
}
