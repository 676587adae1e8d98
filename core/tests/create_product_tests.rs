// tests/create_product_tests.rs
mod common;

use common::*;
use std::sync::atomic::Ordering;
use storefront::{InMemoryStore, NewCustomer, NewProduct, Storefront, StoreError};

fn notebook(quantity: i32) -> NewProduct {
  NewProduct {
    name: "Notebook".to_string(),
    price: price(5, 0),
    quantity,
  }
}

#[tokio::test]
async fn test_product_is_created_with_given_attributes() {
  setup_tracing();
  let store = InMemoryStore::new();

  let product = store.storefront().create_product(notebook(10)).await.unwrap();

  assert_eq!(product.name, "Notebook");
  assert_eq!(product.price, price(5, 0));
  assert_eq!(product.quantity, 10);
  assert_eq!(store.products.get(product.id), Some(product));
}

#[tokio::test]
async fn test_duplicate_name_is_rejected_without_a_write() {
  setup_tracing();
  let store = InMemoryStore::new();
  let storefront = store.storefront();
  storefront.create_product(notebook(10)).await.unwrap();

  let result = storefront.create_product(notebook(99)).await;

  match result {
    Err(StoreError::DuplicateName(name)) => assert_eq!(name, "Notebook"),
    other => panic!("Expected DuplicateName, got {:?}", other),
  }
  assert_eq!(store.products.len(), 1);
  assert_eq!(store.products.all()[0].quantity, 10);
}

#[tokio::test]
async fn test_name_comparison_is_case_sensitive() {
  setup_tracing();
  let store = InMemoryStore::new();
  let storefront = store.storefront();
  storefront.create_product(notebook(10)).await.unwrap();

  let lower = storefront
    .create_product(NewProduct {
      name: "notebook".to_string(),
      price: price(4, 50),
      quantity: 1,
    })
    .await;

  assert!(lower.is_ok());
  assert_eq!(store.products.len(), 2);
}

#[tokio::test]
async fn test_price_and_quantity_are_not_validated() {
  setup_tracing();
  let store = InMemoryStore::new();

  let product = store
    .storefront()
    .create_product(NewProduct {
      name: "Gift card".to_string(),
      price: price(-1, 0),
      quantity: -5,
    })
    .await
    .unwrap();

  assert_eq!(product.quantity, -5);
}

#[tokio::test]
async fn test_lookup_failure_propagates() {
  setup_tracing();
  let store = InMemoryStore::new();
  let products = unreachable_products();
  let storefront = Storefront::new(store.customers.clone(), products.clone(), store.orders.clone());

  let result = storefront.create_product(notebook(1)).await;

  assert!(matches!(result, Err(StoreError::Repository(_))));
  assert_eq!(products.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_customer_is_created_once_per_email() {
  setup_tracing();
  let store = InMemoryStore::new();
  let storefront = store.storefront();
  let ada = NewCustomer {
    name: "Ada Lovelace".to_string(),
    email: "ada@example.com".to_string(),
  };

  let customer = storefront.create_customer(ada.clone()).await.unwrap();
  assert_eq!(customer.email, "ada@example.com");

  let again = storefront
    .create_customer(NewCustomer {
      name: "Another Ada".to_string(),
      ..ada
    })
    .await;
  match again {
    Err(StoreError::DuplicateEmail(email)) => assert_eq!(email, "ada@example.com"),
    other => panic!("Expected DuplicateEmail, got {:?}", other),
  }
  assert_eq!(store.customers.len(), 1);
}
