//! In-process customer directory.

use std::collections::HashMap;

use tokio::sync::RwLock;

use msgwiz_core::customer::{CustomerProfile, CustomerService};
use msgwiz_core::error::Result;
use msgwiz_core::wizard::SimulationData;

/// Customer service backed by process memory.
///
/// Used when no customer API is configured. Synced beauty profiles are kept
/// per id so they can be inspected, but are not merged back into the listed
/// customers: the wizard only ever pushes them.
#[derive(Default)]
pub struct InMemoryCustomerService {
    customers: RwLock<Vec<CustomerProfile>>,
    profiles: RwLock<HashMap<String, SimulationData>>,
}

impl InMemoryCustomerService {
    pub fn new(customers: Vec<CustomerProfile>) -> Self {
        Self {
            customers: RwLock::new(customers),
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// A small directory for demos and the mock setup.
    pub fn with_sample_customers() -> Self {
        let strings = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        Self::new(vec![
            CustomerProfile::new("cust-001", "Yuna Kim")
                .with_skin_type(strings(&["Oily"]))
                .with_skin_concerns(strings(&["Acne", "Pores"]))
                .with_preferred_tone("Playful")
                .with_keywords(strings(&["sale", "new"])),
            CustomerProfile::new("cust-002", "Minho Park")
                .with_skin_type(strings(&["Dry", "Sensitive"]))
                .with_preferred_tone("Calm"),
            CustomerProfile::new("cust-003", "Seo-yeon Lee").with_preferred_tone("Luxury"),
        ])
    }

    /// The last profile pushed for `id`, if any.
    pub async fn synced_profile(&self, id: &str) -> Option<SimulationData> {
        self.profiles.read().await.get(id).cloned()
    }
}

#[async_trait::async_trait]
impl CustomerService for InMemoryCustomerService {
    async fn list_customers(&self) -> Result<Vec<CustomerProfile>> {
        Ok(self.customers.read().await.clone())
    }

    async fn update_customer_profile(
        &self,
        customer_id: &str,
        profile: &SimulationData,
    ) -> Result<()> {
        tracing::debug!(customer_id, "[InMemoryCustomerService] profile synced");
        self.profiles
            .write()
            .await
            .insert(customer_id.to_string(), profile.clone());
        Ok(())
    }
}
