//! Wizard state module.
//!
//! # Module Structure
//!
//! - `channel`: delivery channel enumeration
//! - `simulation`: simulation data, typed patches and the reseed derivation
//! - `model`: the `WizardState` aggregate
//! - `progress`: step completion, percentage and readiness
//! - `store`: `WizardStore`, the single writer of `WizardState`

mod channel;
mod model;
mod progress;
mod simulation;
mod store;

pub use channel::Channel;
pub use model::WizardState;
pub use progress::{PROGRESS_SEGMENTS, StepStatus, WizardProgress, WizardStep};
pub use simulation::{DEFAULT_TONE, SimulationData, SimulationPatch, derive_simulation_data};
pub use store::{SharedWizardStore, WizardStore};
