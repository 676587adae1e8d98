// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every fixture

use async_trait::async_trait;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storefront::{
  CreateOrderRequest, Customer, InMemoryProducts, InMemoryStore, NewCustomer, NewOrder, NewProduct, Order,
  OrdersRepository, Product, ProductsRepository, RequestedProduct, StockUpdate, StoreError, StoreResult,
};
use tracing::Level;
use uuid::Uuid;

// --- Tracing, once per test binary ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Seeded store ---
pub struct Fixture {
  pub store: InMemoryStore,
  pub customer: Customer,
  pub product: Product, // 10 in stock at 5.00
}

pub fn price(units: i64, cents: i64) -> Decimal {
  Decimal::new(units * 100 + cents, 2)
}

pub fn seeded_store() -> Fixture {
  let store = InMemoryStore::new();
  let customer = store.customers.insert(NewCustomer {
    name: "Ada Lovelace".to_string(),
    email: "ada@example.com".to_string(),
  });
  let product = store.products.insert(NewProduct {
    name: "Notebook".to_string(),
    price: price(5, 0),
    quantity: 10,
  });
  Fixture {
    store,
    customer,
    product,
  }
}

pub fn add_product(store: &InMemoryStore, name: &str, unit_price: Decimal, quantity: i32) -> Product {
  store.products.insert(NewProduct {
    name: name.to_string(),
    price: unit_price,
    quantity,
  })
}

pub fn order_request(customer_id: Uuid, lines: &[(Uuid, i32)]) -> CreateOrderRequest {
  CreateOrderRequest {
    customer_id,
    products: lines
      .iter()
      .map(|(id, quantity)| RequestedProduct {
        id: *id,
        quantity: *quantity,
      })
      .collect(),
  }
}

// --- A products repository whose every call fails ---
#[derive(Debug, thiserror::Error)]
#[error("connection reset by peer")]
pub struct ConnectionReset;

#[derive(Default)]
pub struct UnreachableProducts {
  pub update_calls: AtomicUsize,
}

#[async_trait]
impl ProductsRepository for UnreachableProducts {
  async fn find_all_by_id(&self, _ids: &[Uuid]) -> StoreResult<Vec<Product>> {
    Err(StoreError::repository(ConnectionReset))
  }

  async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Product>> {
    Err(StoreError::repository(ConnectionReset))
  }

  async fn create(&self, _data: NewProduct) -> StoreResult<Product> {
    Err(StoreError::repository(ConnectionReset))
  }

  async fn update_quantity(&self, _updates: &[StockUpdate]) -> StoreResult<Vec<Product>> {
    self.update_calls.fetch_add(1, Ordering::SeqCst);
    Err(StoreError::repository(ConnectionReset))
  }
}

pub fn unreachable_products() -> Arc<UnreachableProducts> {
  Arc::new(UnreachableProducts::default())
}

// --- An orders repository that cannot write ---
#[derive(Default)]
pub struct FailingOrders;

#[async_trait]
impl OrdersRepository for FailingOrders {
  async fn create(&self, _data: NewOrder) -> StoreResult<Order> {
    Err(StoreError::repository(ConnectionReset))
  }

  async fn find_by_id(&self, _id: Uuid) -> StoreResult<Option<Order>> {
    Ok(None)
  }
}

// --- Products that read fine but whose stock write fails ---
pub struct StockWriteFails {
  pub inner: Arc<InMemoryProducts>,
}

#[async_trait]
impl ProductsRepository for StockWriteFails {
  async fn find_all_by_id(&self, ids: &[Uuid]) -> StoreResult<Vec<Product>> {
    self.inner.find_all_by_id(ids).await
  }

  async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
    self.inner.find_by_name(name).await
  }

  async fn create(&self, data: NewProduct) -> StoreResult<Product> {
    self.inner.create(data).await
  }

  async fn update_quantity(&self, _updates: &[StockUpdate]) -> StoreResult<Vec<Product>> {
    Err(StoreError::repository(ConnectionReset))
  }
}
