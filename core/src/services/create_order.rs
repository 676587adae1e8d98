// storefront/src/services/create_order.rs

//! Order placement, run as a workflow of named steps over `CreateOrderCtxData`.
//!
//! Every read and every validation happens before the first write: the order is
//! only persisted once the customer, every product and every stock level checked
//! out, and stock is only decremented after the order exists.

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateOrderRequest, Customer, NewOrder, Order, OrderLine, Product, RequestedProduct, StockUpdate};
use crate::repositories::{CustomersRepository, OrdersRepository, ProductsRepository};
use crate::workflow::{ContextData, Workflow};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const MERGE_REQUESTED_LINES: &str = "merge_requested_lines";
pub const FIND_CUSTOMER: &str = "find_customer";
pub const FIND_PRODUCTS: &str = "find_products";
pub const PRICE_LINES: &str = "price_lines";
pub const COMPUTE_REMAINING_STOCK: &str = "compute_remaining_stock";
pub const PERSIST_ORDER: &str = "persist_order";
pub const UPDATE_STOCK: &str = "update_stock";

/// State shared by the order placement steps. Each step fills in the fields the
/// next one relies on.
pub struct CreateOrderCtxData {
  customers: Arc<dyn CustomersRepository>,
  products: Arc<dyn ProductsRepository>,
  orders: Arc<dyn OrdersRepository>,
  pub request: CreateOrderRequest,
  pub lines: Vec<RequestedProduct>, // Request lines, one per distinct product id
  pub customer: Option<Customer>,
  pub found_products: Vec<Product>,
  pub order_lines: Vec<OrderLine>,
  pub stock_updates: Vec<StockUpdate>,
  pub order: Option<Order>,
}

pub struct CreateOrderService {
  customers: Arc<dyn CustomersRepository>,
  products: Arc<dyn ProductsRepository>,
  orders: Arc<dyn OrdersRepository>,
  workflow: Workflow<CreateOrderCtxData, StoreError>,
}

impl CreateOrderService {
  pub fn new(
    customers: Arc<dyn CustomersRepository>,
    products: Arc<dyn ProductsRepository>,
    orders: Arc<dyn OrdersRepository>,
  ) -> Self {
    Self {
      customers,
      products,
      orders,
      workflow: build_create_order_workflow(),
    }
  }

  #[instrument(
    name = "CreateOrderService::execute",
    skip(self, request),
    fields(customer_id = %request.customer_id, requested_lines = request.products.len()),
    err(Display)
  )]
  pub async fn execute(&self, request: CreateOrderRequest) -> StoreResult<Order> {
    let ctx_data = ContextData::new(CreateOrderCtxData {
      customers: self.customers.clone(),
      products: self.products.clone(),
      orders: self.orders.clone(),
      request,
      lines: Vec::new(),
      customer: None,
      found_products: Vec::new(),
      order_lines: Vec::new(),
      stock_updates: Vec::new(),
      order: None,
    });

    self.workflow.run(ctx_data.clone()).await?;

    let order = ctx_data
      .try_unwrap()
      .map_err(|_| StoreError::Internal("order context still shared after the workflow finished".to_string()))?
      .order
      .ok_or_else(|| StoreError::Internal("order workflow completed without persisting an order".to_string()))?;

    info!(order_id = %order.id, lines = order.order_products.len(), "Order created.");
    Ok(order)
  }
}

/// Declares the order placement steps and binds their handlers.
pub fn build_create_order_workflow() -> Workflow<CreateOrderCtxData, StoreError> {
  let mut w = Workflow::<CreateOrderCtxData, StoreError>::new(
    "create_order",
    &[
      MERGE_REQUESTED_LINES,
      FIND_CUSTOMER,
      FIND_PRODUCTS,
      PRICE_LINES,
      COMPUTE_REMAINING_STOCK,
      PERSIST_ORDER,
      UPDATE_STOCK,
    ],
  );

  w.on(MERGE_REQUESTED_LINES, merge_requested_lines);
  w.on(FIND_CUSTOMER, find_customer);
  w.on(FIND_PRODUCTS, find_products);
  w.on(PRICE_LINES, price_lines);
  w.on(COMPUTE_REMAINING_STOCK, compute_remaining_stock);
  w.on(PERSIST_ORDER, persist_order);
  w.on(UPDATE_STOCK, update_stock);
  w
}

/// Rejects non-positive quantities and folds repeated product ids into a single
/// line, so the stock check below sees the total amount asked for.
async fn merge_requested_lines(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let mut guard = ctx_data.write();
  let mut merged: Vec<RequestedProduct> = Vec::with_capacity(guard.request.products.len());

  for requested in &guard.request.products {
    if requested.quantity <= 0 {
      warn!(product_id = %requested.id, quantity = requested.quantity, "Rejecting non-positive quantity.");
      return Err(StoreError::Validation(format!(
        "Quantity for product {} must be positive, got {}",
        requested.id, requested.quantity
      )));
    }
    match merged.iter_mut().find(|line| line.id == requested.id) {
      Some(line) => {
        line.quantity = line.quantity.checked_add(requested.quantity).ok_or_else(|| {
          StoreError::Validation(format!("Requested quantity for product {} is too large", requested.id))
        })?;
      }
      None => merged.push(*requested),
    }
  }

  guard.lines = merged;
  Ok(())
}

async fn find_customer(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let (customers, customer_id) = {
    let guard = ctx_data.read();
    (guard.customers.clone(), guard.request.customer_id)
  };

  let customer = customers.find_by_id(customer_id).await?.ok_or_else(|| {
    warn!(%customer_id, "Customer not found.");
    StoreError::NotFound(format!("Customer {} not found", customer_id))
  })?;

  ctx_data.write().customer = Some(customer);
  Ok(())
}

async fn find_products(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let (products, ids) = {
    let guard = ctx_data.read();
    let ids: Vec<_> = guard.lines.iter().map(|line| line.id).collect();
    (guard.products.clone(), ids)
  };

  let found = products.find_all_by_id(&ids).await?;
  if found.is_empty() {
    warn!(requested = ids.len(), "None of the requested products exist.");
    return Err(StoreError::NotFound(
      "No products were found for the given ids".to_string(),
    ));
  }

  ctx_data.write().found_products = found;
  Ok(())
}

async fn price_lines(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let mut guard = ctx_data.write();
  let mut order_lines = Vec::with_capacity(guard.lines.len());

  for line in &guard.lines {
    let product = guard
      .found_products
      .iter()
      .find(|p| p.id == line.id)
      .ok_or_else(|| StoreError::NotFound(format!("Product {} does not exist", line.id)))?;

    if product.quantity < line.quantity {
      warn!(
        product_id = %product.id,
        requested = line.quantity,
        available = product.quantity,
        "Insufficient stock."
      );
      return Err(StoreError::InsufficientStock {
        product_id: product.id,
        requested: line.quantity,
        available: product.quantity,
      });
    }

    order_lines.push(OrderLine {
      product_id: product.id,
      quantity: line.quantity,
      price: product.price,
    });
  }

  guard.order_lines = order_lines;
  Ok(())
}

async fn compute_remaining_stock(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let mut guard = ctx_data.write();
  let mut updates = Vec::with_capacity(guard.order_lines.len());

  for line in &guard.order_lines {
    let product = guard
      .found_products
      .iter()
      .find(|p| p.id == line.product_id)
      .ok_or_else(|| StoreError::Internal(format!("priced line for unknown product {}", line.product_id)))?;
    updates.push(StockUpdate {
      id: product.id,
      quantity: product.quantity - line.quantity,
    });
  }

  guard.stock_updates = updates;
  Ok(())
}

async fn persist_order(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let (orders, new_order) = {
    let guard = ctx_data.read();
    let customer = guard
      .customer
      .clone()
      .ok_or_else(|| StoreError::Internal("customer missing when persisting order".to_string()))?;
    (
      guard.orders.clone(),
      NewOrder {
        customer,
        products: guard.order_lines.clone(),
      },
    )
  };

  let order = orders.create(new_order).await?;
  ctx_data.write().order = Some(order);
  Ok(())
}

async fn update_stock(ctx_data: ContextData<CreateOrderCtxData>) -> StoreResult<()> {
  let (products, updates) = {
    let guard = ctx_data.read();
    (guard.products.clone(), guard.stock_updates.clone())
  };

  products.update_quantity(&updates).await?;
  Ok(())
}
