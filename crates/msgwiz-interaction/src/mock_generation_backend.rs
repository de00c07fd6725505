//! MockGenerationBackend - canned responses without a server.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use msgwiz_core::config::DEFAULT_MOCK_DELAY_MS;
use msgwiz_core::error::Result;
use msgwiz_core::generation::{GenerateMessageRequest, GenerateMessageResponse, GenerationBackend};

/// Deterministic generation backend used until a live backend is configured.
///
/// Waits `delay` to mimic generation latency, then echoes the request into a
/// templated message. Never fails.
#[derive(Debug, Clone)]
pub struct MockGenerationBackend {
    delay: Duration,
}

impl MockGenerationBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn render(request: &GenerateMessageRequest) -> String {
        let intention = request
            .intention
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or("our promotion");
        let tone = Some(request.beauty_profile.preferred_tone.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or("Default");
        let target = if request.has_brand {
            request.target_brand.as_deref().unwrap_or_default()
        } else {
            "No brand"
        };

        format!(
            "(Mock result) [{channel}] Dear customer, we'd like to offer you {intention}!\n\n\
             Selected tone: {tone}\n\
             Target: {target}\n\n\
             This message was generated without a backend connection.",
            channel = request.channel,
        )
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MOCK_DELAY_MS))
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_message(
        &self,
        request: &GenerateMessageRequest,
    ) -> Result<GenerateMessageResponse> {
        tracing::debug!(
            user_id = %request.user_id,
            channel = %request.channel,
            delay_ms = self.delay.as_millis() as u64,
            "[MockGenerationBackend] generating"
        );
        tokio::time::sleep(self.delay).await;

        Ok(GenerateMessageResponse {
            content: Self::render(request),
            channel: request.channel.to_string(),
            user_id: request.user_id.clone(),
            generated_at: Utc::now(),
            compliance_log: vec![
                "Prohibited-word check passed".to_string(),
                "Mock data".to_string(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgwiz_core::wizard::{Channel, SimulationData};

    fn request() -> GenerateMessageRequest {
        GenerateMessageRequest {
            user_id: "p1".to_string(),
            channel: Channel::Email,
            intention: Some("Spring Sale".to_string()),
            has_brand: false,
            target_brand: None,
            beauty_profile: SimulationData::default(),
            user_prompt: None,
        }
    }

    #[tokio::test]
    async fn test_echoes_request() {
        let backend = MockGenerationBackend::new(Duration::ZERO);
        let response = backend.generate_message(&request()).await.unwrap();

        assert!(response.content.starts_with("(Mock result) [EMAIL]"));
        assert!(response.content.contains("Spring Sale"));
        assert!(response.content.contains("Selected tone: Neutral"));
        assert!(response.content.contains("Target: No brand"));
        assert_eq!(response.channel, "EMAIL");
        assert_eq!(response.user_id, "p1");
        assert_eq!(response.compliance_log, vec!["Prohibited-word check passed", "Mock data"]);
    }

    #[test]
    fn test_fallbacks() {
        let mut request = request();
        request.intention = None;
        request.beauty_profile.preferred_tone = String::new();
        request.has_brand = true;
        request.target_brand = Some("Aurora".to_string());

        let content = MockGenerationBackend::render(&request);
        assert!(content.contains("offer you our promotion!"));
        assert!(content.contains("Selected tone: Default"));
        assert!(content.contains("Target: Aurora"));
    }

    #[test]
    fn test_empty_intention_uses_fallback() {
        let mut request = request();
        request.intention = Some(String::new());
        assert!(MockGenerationBackend::render(&request).contains("our promotion"));
    }
}
