// storefront/src/services/create_product.rs

use crate::error::{StoreError, StoreResult};
use crate::models::{NewProduct, Product};
use crate::repositories::ProductsRepository;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Adds a catalog entry unless one with the exact same name already exists.
///
/// Price and quantity are stored as given; this service only guards name uniqueness.
pub struct CreateProductService {
  products: Arc<dyn ProductsRepository>,
}

impl CreateProductService {
  pub fn new(products: Arc<dyn ProductsRepository>) -> Self {
    Self { products }
  }

  #[instrument(name = "CreateProductService::execute", skip(self, data), fields(name = %data.name), err(Display))]
  pub async fn execute(&self, data: NewProduct) -> StoreResult<Product> {
    if let Some(existing) = self.products.find_by_name(&data.name).await? {
      warn!(existing_id = %existing.id, "Product name already taken.");
      return Err(StoreError::DuplicateName(data.name));
    }

    let product = self.products.create(data).await?;
    info!(product_id = %product.id, "Product created.");
    Ok(product)
  }
}
