// storefront/examples/place_order.rs

use rust_decimal::Decimal;
use storefront::{CreateOrderRequest, InMemoryStore, NewCustomer, NewProduct, RequestedProduct, StoreError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  info!("--- Place Order Example ---");

  // 1. Wire the services over in-memory repositories
  let store = InMemoryStore::new();
  let storefront = store.storefront();

  // 2. Register a customer and a product
  let customer = storefront
    .create_customer(NewCustomer {
      name: "Grace Hopper".to_string(),
      email: "grace@example.com".to_string(),
    })
    .await?;
  let product = storefront
    .create_product(NewProduct {
      name: "Mechanical keyboard".to_string(),
      price: Decimal::new(8990, 2),
      quantity: 10,
    })
    .await?;

  // 3. Place an order for three of them
  let order = storefront
    .create_order(CreateOrderRequest {
      customer_id: customer.id,
      products: vec![RequestedProduct {
        id: product.id,
        quantity: 3,
      }],
    })
    .await?;
  info!(order_id = %order.id, total = %order.total(), "Order placed.");

  // 4. Asking for more than what is left fails and changes nothing
  match storefront
    .create_order(CreateOrderRequest {
      customer_id: customer.id,
      products: vec![RequestedProduct {
        id: product.id,
        quantity: 8,
      }],
    })
    .await
  {
    Err(err @ StoreError::InsufficientStock { .. }) => warn!(error = %err, "Second order rejected as expected."),
    other => info!(result = ?other, "Unexpected outcome for the second order."),
  }

  let remaining = store.products.get(product.id).map(|p| p.quantity);
  info!(?remaining, "Stock after both attempts.");
  assert_eq!(remaining, Some(7));

  Ok(())
}
