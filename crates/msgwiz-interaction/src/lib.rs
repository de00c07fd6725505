//! Interaction layer: generation backends and the remote customer service.

mod envelope;
pub mod factory;
pub mod http_generation_backend;
pub mod mock_generation_backend;
pub mod rest_customer_service;

#[cfg(test)]
mod test_server;

pub use factory::{build_customer_service, build_generation_backend};
pub use http_generation_backend::HttpGenerationBackend;
pub use mock_generation_backend::MockGenerationBackend;
pub use rest_customer_service::RestCustomerService;
