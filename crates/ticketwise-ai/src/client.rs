//! Chat-completion client

use crate::error::{Error, Result};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Client for an OpenAI-compatible chat-completion endpoint.
///
/// One instance is shared across requests; every call is a single
/// non-streaming round trip with no retry.
pub struct AiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at an alternate endpoint implementing the same
    /// wire contract
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Run one completion and return the first choice's message content
    pub async fn analyze(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(system_instruction),
                ChatMessage::user(user_content),
            ],
        };

        tracing::debug!("requesting completion from model {}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(Error::EmptyCompletion)?;
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_analyze_sends_two_messages_with_bearer_auth() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer gsk-test")
                .json_body(json!({
                    "model": "llama-3.1-8b-instant",
                    "messages": [
                        { "role": "system", "content": "You are a support assistant." },
                        { "role": "user", "content": "Issue Summary: vpn drops\nDescription: every hour" }
                    ]
                }));
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Check the tunnel." } }]
            }));
        });

        let client = AiClient::with_base_url("gsk-test".to_string(), server.base_url());
        let analysis = client
            .analyze(
                "You are a support assistant.",
                "Issue Summary: vpn drops\nDescription: every hour",
            )
            .await
            .unwrap();

        mock.assert();
        assert_eq!(analysis, "Check the tunnel.");
    }

    #[tokio::test]
    async fn test_analyze_maps_provider_rejection_to_api_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("rate limit exceeded");
        });

        let client = AiClient::with_base_url("gsk-test".to_string(), server.base_url());
        let error = client.analyze("system", "user").await.unwrap_err();

        match error {
            Error::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limit exceeded");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_choice_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(json!({ "choices": [] }));
        });

        let client = AiClient::with_base_url("gsk-test".to_string(), server.base_url());
        let error = client.analyze("system", "user").await.unwrap_err();

        assert!(matches!(error, Error::EmptyCompletion));
    }
}
