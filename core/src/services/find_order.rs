// storefront/src/services/find_order.rs

use crate::error::{StoreError, StoreResult};
use crate::models::Order;
use crate::repositories::OrdersRepository;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

pub struct FindOrderService {
  orders: Arc<dyn OrdersRepository>,
}

impl FindOrderService {
  pub fn new(orders: Arc<dyn OrdersRepository>) -> Self {
    Self { orders }
  }

  #[instrument(name = "FindOrderService::execute", skip(self), err(Display))]
  pub async fn execute(&self, order_id: Uuid) -> StoreResult<Order> {
    self
      .orders
      .find_by_id(order_id)
      .await?
      .ok_or_else(|| StoreError::NotFound(format!("Order {} not found", order_id)))
  }
}
