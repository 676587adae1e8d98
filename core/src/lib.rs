// storefront/src/lib.rs

//! Storefront: order placement and catalog services for a small e-commerce backend.
//!
//! The crate provides:
//!  - Order creation: validates the customer, prices the requested products
//!    against current stock, persists the order and decrements stock.
//!  - Product creation with duplicate-name rejection.
//!  - Customer creation with duplicate-e-mail rejection, and order lookup.
//!
//! Services are written against the repository traits in [`repositories`]; pass
//! any implementation to [`Storefront::new`]. In-memory repositories ship with the
//! crate, a PostgreSQL implementation lives in `storefront-postgres`.

pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod workflow;

pub use crate::error::{StoreError, StoreResult, WorkflowError};
pub use crate::models::{
  CreateOrderRequest, Customer, NewCustomer, NewOrder, NewProduct, Order, OrderLine, OrderProduct, Product,
  RequestedProduct, StockUpdate,
};
pub use crate::repositories::{
  CustomersRepository, InMemoryCustomers, InMemoryOrders, InMemoryProducts, InMemoryStore, OrdersRepository,
  ProductsRepository,
};
pub use crate::services::{
  CreateCustomerService, CreateOrderService, CreateProductService, FindOrderService, Storefront,
};
pub use crate::workflow::{ContextData, Workflow};
