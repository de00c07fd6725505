//! Generation backend trait.

use super::model::{GenerateMessageRequest, GenerateMessageResponse};
use crate::error::Result;

/// Capability that turns a finished wizard request into message content.
///
/// Implementations are picked once at startup from configuration (mock
/// stand-in or live HTTP backend) and injected as `Arc<dyn GenerationBackend>`.
#[async_trait::async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short identifier used in logs (e.g. "mock", "http").
    fn name(&self) -> &str;

    /// Generates a message for `request`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decoding failure; callers treat all of them
    /// as one generation pipeline failure.
    async fn generate_message(
        &self,
        request: &GenerateMessageRequest,
    ) -> Result<GenerateMessageResponse>;
}
