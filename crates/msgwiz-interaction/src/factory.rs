//! Selects collaborator implementations from configuration.

use std::sync::Arc;

use msgwiz_core::config::{BackendConfig, BackendMode, CustomerServiceMode, WizardConfig};
use msgwiz_core::customer::CustomerService;
use msgwiz_core::generation::GenerationBackend;
use msgwiz_infrastructure::InMemoryCustomerService;

use crate::http_generation_backend::HttpGenerationBackend;
use crate::mock_generation_backend::MockGenerationBackend;
use crate::rest_customer_service::RestCustomerService;

pub fn build_generation_backend(config: &BackendConfig) -> Arc<dyn GenerationBackend> {
    let backend: Arc<dyn GenerationBackend> = match config.mode {
        BackendMode::Mock => Arc::new(MockGenerationBackend::new(config.mock_delay())),
        BackendMode::Http => Arc::new(
            HttpGenerationBackend::new(&config.base_url).with_timeout(config.request_timeout()),
        ),
    };
    tracing::info!(backend = backend.name(), "[Factory] generation backend ready");
    backend
}

pub fn build_customer_service(config: &WizardConfig) -> Arc<dyn CustomerService> {
    match config.customers.mode {
        CustomerServiceMode::Memory => Arc::new(InMemoryCustomerService::with_sample_customers()),
        CustomerServiceMode::Rest => {
            tracing::info!(
                base_url = config.customer_base_url(),
                "[Factory] using REST customer service"
            );
            Arc::new(
                RestCustomerService::new(config.customer_base_url())
                    .with_timeout(config.backend.request_timeout()),
            )
        }
    }
}
