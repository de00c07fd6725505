//! Customer directory use cases.

use std::sync::Arc;

use msgwiz_core::customer::CustomerService;
use msgwiz_core::error::{Result, WizardError};
use msgwiz_core::wizard::SharedWizardStore;

/// Loads customers into the store and selects them by id.
pub struct CustomerDirectoryUseCase {
    store: SharedWizardStore,
    customers: Arc<dyn CustomerService>,
}

impl CustomerDirectoryUseCase {
    pub fn new(store: SharedWizardStore, customers: Arc<dyn CustomerService>) -> Self {
        Self { store, customers }
    }

    /// Replaces the store's customer list with the service's current one.
    ///
    /// Returns the number of customers loaded.
    pub async fn refresh(&self) -> Result<usize> {
        let customers = self.customers.list_customers().await?;
        let count = customers.len();
        self.store.write().await.set_customer_list(customers);
        tracing::debug!(count, "[CustomerDirectory] customer list refreshed");
        Ok(count)
    }

    /// Selects a customer from the loaded list, or clears the selection.
    pub async fn select(&self, customer_id: Option<&str>) -> Result<()> {
        let mut store = self.store.write().await;
        let customer = match customer_id {
            None => None,
            Some(id) => Some(
                store
                    .state()
                    .customer_list
                    .iter()
                    .find(|c| c.id == id)
                    .cloned()
                    .ok_or_else(|| WizardError::not_found("Customer", id))?,
            ),
        };
        store.set_selected_customer(customer);
        Ok(())
    }
}
