// storefront/src/services/mod.rs

//! Use-case services and the `Storefront` facade that wires them together.

pub mod create_customer;
pub mod create_order;
pub mod create_product;
pub mod find_order;

pub use create_customer::CreateCustomerService;
pub use create_order::{build_create_order_workflow, CreateOrderCtxData, CreateOrderService};
pub use create_product::CreateProductService;
pub use find_order::FindOrderService;

use crate::error::StoreResult;
use crate::models::{CreateOrderRequest, Customer, NewCustomer, NewProduct, Order, Product};
use crate::repositories::{CustomersRepository, OrdersRepository, ProductsRepository};
use std::sync::Arc;
use uuid::Uuid;

/// Entry point for callers: every service, built over one set of repositories.
///
/// Cheap to clone; clones share the same services.
#[derive(Clone)]
pub struct Storefront {
  create_order: Arc<CreateOrderService>,
  create_product: Arc<CreateProductService>,
  create_customer: Arc<CreateCustomerService>,
  find_order: Arc<FindOrderService>,
}

impl Storefront {
  pub fn new(
    customers: Arc<dyn CustomersRepository>,
    products: Arc<dyn ProductsRepository>,
    orders: Arc<dyn OrdersRepository>,
  ) -> Self {
    tracing::debug!("Building storefront services.");
    Self {
      create_order: Arc::new(CreateOrderService::new(
        customers.clone(),
        products.clone(),
        orders.clone(),
      )),
      create_product: Arc::new(CreateProductService::new(products)),
      create_customer: Arc::new(CreateCustomerService::new(customers)),
      find_order: Arc::new(FindOrderService::new(orders)),
    }
  }

  pub async fn create_order(&self, request: CreateOrderRequest) -> StoreResult<Order> {
    self.create_order.execute(request).await
  }

  pub async fn create_product(&self, data: NewProduct) -> StoreResult<Product> {
    self.create_product.execute(data).await
  }

  pub async fn create_customer(&self, data: NewCustomer) -> StoreResult<Customer> {
    self.create_customer.execute(data).await
  }

  pub async fn find_order(&self, order_id: Uuid) -> StoreResult<Order> {
    self.find_order.execute(order_id).await
  }
}
