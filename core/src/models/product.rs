// storefront/src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String, // Unique, compared case-sensitively
  pub price: Decimal,
  pub quantity: i32, // Units in stock, never negative
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Attributes of a catalog entry that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
  pub name: String,
  pub price: Decimal,
  pub quantity: i32,
}

/// The stock level a product must be set to after an order consumed part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
  pub id: Uuid,
  pub quantity: i32,
}
