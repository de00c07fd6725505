//! Infrastructure layer: configuration, paths and local collaborators.

pub mod config_service;
pub mod in_memory_customer_service;
pub mod paths;
pub mod toml_catalog_repository;

pub use config_service::ConfigService;
pub use in_memory_customer_service::InMemoryCustomerService;
pub use paths::WizardPaths;
pub use toml_catalog_repository::{PresetCatalogRepository, TomlCatalogRepository};
