//! HttpGenerationBackend - REST implementation of the generation backend.
//!
//! POSTs the request to `{base_url}/message`. Any transport error, non-2xx
//! status or unparseable body is reported as `WizardError::Backend`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use msgwiz_core::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use msgwiz_core::error::{Result, WizardError};
use msgwiz_core::generation::{GenerateMessageRequest, GenerateMessageResponse, GenerationBackend};

use crate::envelope::Envelope;

#[derive(Clone)]
pub struct HttpGenerationBackend {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpGenerationBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerationBackend for HttpGenerationBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate_message(
        &self,
        request: &GenerateMessageRequest,
    ) -> Result<GenerateMessageResponse> {
        let url = format!("{}/message", self.base_url);
        tracing::debug!(url = %url, user_id = %request.user_id, "[HttpGenerationBackend] POST");

        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| WizardError::backend(format!("Generation request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%status, "[HttpGenerationBackend] server error");
            return Err(WizardError::backend(format!(
                "Server Error ({}): {}",
                status, error_text
            )));
        }

        let envelope: Envelope<GenerateMessageResponse> = response
            .json()
            .await
            .map_err(|e| WizardError::backend(format!("Failed to parse generation response: {}", e)))?;
        Ok(envelope.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{closed_port_url, serve_once};
    use msgwiz_core::wizard::{Channel, SimulationData};

    const RESPONSE: &str = r#"{"content":"Spring glow is here","channel":"KAKAO","user_id":"p1","generated_at":"2026-03-01T09:30:00Z","compliance_log":["ok"]}"#;

    fn request() -> GenerateMessageRequest {
        GenerateMessageRequest {
            user_id: "p1".to_string(),
            channel: Channel::Kakao,
            intention: Some("Spring Sale".to_string()),
            has_brand: true,
            target_brand: Some("Aurora".to_string()),
            beauty_profile: SimulationData::default(),
            user_prompt: None,
        }
    }

    #[tokio::test]
    async fn test_posts_request_to_message_endpoint() {
        let (base_url, recorded) = serve_once(200, RESPONSE).await;
        let backend = HttpGenerationBackend::new(format!("{base_url}/"));

        let response = backend.generate_message(&request()).await.unwrap();
        assert_eq!(response.content, "Spring glow is here");
        assert_eq!(response.compliance_log, vec!["ok"]);

        let recorded = recorded.await.unwrap();
        assert!(recorded.head.starts_with("POST /message HTTP/1.1"));
        let body: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
        assert_eq!(body["channel"], "KAKAO");
        assert_eq!(body["target_brand"], "Aurora");
        assert_eq!(body["beauty_profile"]["preferred_tone"], "Neutral");
    }

    #[tokio::test]
    async fn test_accepts_data_envelope() {
        let (base_url, _recorded) = serve_once(200, &format!(r#"{{"data":{RESPONSE}}}"#)).await;
        let response = HttpGenerationBackend::new(base_url)
            .generate_message(&request())
            .await
            .unwrap();
        assert_eq!(response.channel, "KAKAO");
    }

    #[tokio::test]
    async fn test_non_success_status_is_backend_error() {
        let (base_url, _recorded) = serve_once(500, r#"{"detail":"boom"}"#).await;
        let err = HttpGenerationBackend::new(base_url)
            .generate_message(&request())
            .await
            .unwrap_err();
        assert!(err.is_backend());
        assert!(err.to_string().contains("Server Error"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_backend_error() {
        let (base_url, _recorded) = serve_once(200, r#"{"content":1}"#).await;
        let err = HttpGenerationBackend::new(base_url)
            .generate_message(&request())
            .await
            .unwrap_err();
        assert!(err.is_backend());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_backend_error() {
        let err = HttpGenerationBackend::new(closed_port_url().await)
            .with_timeout(Duration::from_secs(2))
            .generate_message(&request())
            .await
            .unwrap_err();
        assert!(err.is_backend());
    }
}
