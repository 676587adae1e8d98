// storefront/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::Customer;
use super::order_product::OrderProduct;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub customer: Customer,
  pub order_products: Vec<OrderProduct>, // Same order as the request lines
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Order {
  /// Sum of `price * quantity` over all line items.
  pub fn total(&self) -> Decimal {
    self
      .order_products
      .iter()
      .map(|line| line.price * Decimal::from(line.quantity))
      .sum()
  }
}

/// One `{product id, quantity}` pair of an incoming order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProduct {
  pub id: Uuid,
  pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
  pub customer_id: Uuid,
  pub products: Vec<RequestedProduct>,
}

/// A validated, priced line handed to the orders repository.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  pub product_id: Uuid,
  pub quantity: i32,
  pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
  pub customer: Customer,
  pub products: Vec<OrderLine>,
}
