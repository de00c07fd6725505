//! RestCustomerService - customer directory reached over HTTP.
//!
//! Endpoints:
//! - `GET {base_url}/customers` → customer list (bare or `{ "data": [...] }`)
//! - `PATCH {base_url}/customers/{id}` with the beauty profile as body

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use msgwiz_core::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use msgwiz_core::customer::{CustomerProfile, CustomerService};
use msgwiz_core::error::{Result, WizardError};
use msgwiz_core::wizard::SimulationData;

use crate::envelope::Envelope;

#[derive(Clone)]
pub struct RestCustomerService {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RestCustomerService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn error_from(response: reqwest::Response, action: &str) -> WizardError {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        WizardError::backend(format!("{} failed ({}): {}", action, status, error_text))
    }
}

#[async_trait]
impl CustomerService for RestCustomerService {
    async fn list_customers(&self) -> Result<Vec<CustomerProfile>> {
        let url = format!("{}/customers", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| WizardError::backend(format!("Failed to list customers: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Customer listing").await);
        }

        let envelope: Envelope<Vec<CustomerProfile>> = response
            .json()
            .await
            .map_err(|e| WizardError::backend(format!("Failed to parse customer list: {}", e)))?;
        let customers = envelope.into_inner();
        tracing::debug!(count = customers.len(), "[RestCustomerService] customers listed");
        Ok(customers)
    }

    async fn update_customer_profile(
        &self,
        customer_id: &str,
        profile: &SimulationData,
    ) -> Result<()> {
        let url = format!("{}/customers/{}", self.base_url, customer_id);
        let response = self
            .client
            .patch(&url)
            .json(profile)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| WizardError::backend(format!("Profile sync failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, "Profile sync").await);
        }

        tracing::debug!(customer_id, "[RestCustomerService] profile synced");
        Ok(())
    }
}
