//! Customer domain module.
//!
//! - `model`: `CustomerProfile`
//! - `service`: `CustomerService` trait (listing + profile sync)

mod model;
mod service;

pub use model::CustomerProfile;
pub use service::CustomerService;
