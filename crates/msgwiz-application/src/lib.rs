//! Application layer: use cases over the wizard store.

pub mod customer_usecase;
pub mod generation_usecase;
pub mod notifier;
pub mod reset_usecase;
pub mod summary;

pub use customer_usecase::CustomerDirectoryUseCase;
pub use generation_usecase::{
    GENERATION_FAILED_MESSAGE, GenerateMessageUseCase, GenerationOutcome, SkipReason,
};
pub use notifier::{Notifier, TracingNotifier};
pub use reset_usecase::confirm_and_reset;
pub use summary::{ResultCard, WizardSummary};
