//! Domain layer of MSGWIZ.
//!
//! Holds the wizard state store, the persona/option catalogs and the
//! contracts of the external collaborators (generation backend, customer
//! service, catalog source).

pub mod config;
pub mod customer;
pub mod error;
pub mod generation;
pub mod persona;
pub mod wizard;

// Re-export common error type
pub use error::WizardError;
