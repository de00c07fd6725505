//! Persona domain module.
//!
//! This module contains the persona catalog, per-persona option sets, and the
//! repository interface used to load them.
//!
//! # Module Structure
//!
//! - `model`: `Persona` and `PersonaOptionSet`
//! - `catalog`: attribute catalogs and persona → option-set lookup
//! - `preset`: built-in catalog
//! - `repository`: catalog loading trait

mod catalog;
mod model;
mod preset;
mod repository;

// Re-export public API
pub use catalog::{CatalogOption, OptionCatalog, PersonaCatalog};
pub use model::{Persona, PersonaOptionSet};
pub use preset::{get_default_catalog, get_default_options, get_default_personas};
pub use repository::CatalogRepository;
