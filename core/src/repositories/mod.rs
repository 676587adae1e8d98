// storefront/src/repositories/mod.rs

//! Persistence capabilities the services are written against.
//!
//! The traits are object-safe (`async_trait`) so services hold them as
//! `Arc<dyn ...Repository>` and never know which store backs them. Any failure of
//! the underlying store is reported as `StoreError::Repository` and is passed
//! through the services unchanged.

pub mod memory;

use crate::error::StoreResult;
use crate::models::{Customer, NewCustomer, NewOrder, NewProduct, Order, Product, StockUpdate};
use async_trait::async_trait;
use uuid::Uuid;

pub use memory::{InMemoryCustomers, InMemoryOrders, InMemoryProducts, InMemoryStore};

#[async_trait]
pub trait CustomersRepository: Send + Sync {
  async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>>;

  async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>>;

  async fn create(&self, data: NewCustomer) -> StoreResult<Customer>;
}

#[async_trait]
pub trait ProductsRepository: Send + Sync {
  /// Returns the subset of `ids` that exist, in no particular order.
  async fn find_all_by_id(&self, ids: &[Uuid]) -> StoreResult<Vec<Product>>;

  /// Exact, case-sensitive match on the product name.
  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>>;

  async fn create(&self, data: NewProduct) -> StoreResult<Product>;

  /// Overwrites the stock of every listed product and returns them updated.
  async fn update_quantity(&self, updates: &[StockUpdate]) -> StoreResult<Vec<Product>>;
}

#[async_trait]
pub trait OrdersRepository: Send + Sync {
  /// Persists the order and all of its line items as one unit.
  async fn create(&self, data: NewOrder) -> StoreResult<Order>;

  async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Order>>;
}
