// storefront/src/models/mod.rs

//! Entities handled by the store services and the payloads used to create them.

pub mod customer;
pub mod order;
pub mod order_product;
pub mod product;

pub use customer::{Customer, NewCustomer};
pub use order::{CreateOrderRequest, NewOrder, Order, OrderLine, RequestedProduct};
pub use order_product::OrderProduct;
pub use product::{NewProduct, Product, StockUpdate};
