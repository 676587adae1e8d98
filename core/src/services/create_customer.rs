// storefront/src/services/create_customer.rs

use crate::error::{StoreError, StoreResult};
use crate::models::{Customer, NewCustomer};
use crate::repositories::CustomersRepository;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct CreateCustomerService {
  customers: Arc<dyn CustomersRepository>,
}

impl CreateCustomerService {
  pub fn new(customers: Arc<dyn CustomersRepository>) -> Self {
    Self { customers }
  }

  #[instrument(name = "CreateCustomerService::execute", skip(self, data), err(Display))]
  pub async fn execute(&self, data: NewCustomer) -> StoreResult<Customer> {
    if self.customers.find_by_email(&data.email).await?.is_some() {
      warn!("E-mail already registered.");
      return Err(StoreError::DuplicateEmail(data.email));
    }

    let customer = self.customers.create(data).await?;
    info!(customer_id = %customer.id, "Customer created.");
    Ok(customer)
  }
}
