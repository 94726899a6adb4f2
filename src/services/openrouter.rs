use async_trait::async_trait;
use reqwest::Client;

use crate::enums::relay_error::RelayError;
use crate::structs::ai::openrouter::openrouter_request::OpenRouterRequest;
use crate::structs::ai::openrouter::openrouter_response::OpenRouterResponse;
use crate::structs::chat_message::ChatMessage;
use crate::structs::config::config::Config;
use crate::traits::chat_provider::ChatProvider;

/// OpenRouter chat-completions client. One outbound call per `chat`, no retry,
/// no timeout beyond the transport defaults.
#[derive(Clone)]
pub struct OpenRouterProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    referer: String,
    site_title: String,
}

impl OpenRouterProvider {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.ai.api_key.clone(),
            base_url: config.ai.base_url.clone(),
            client: Client::new(),
            model: config.ai.model.clone(),
            max_tokens: config.ai.max_tokens,
            temperature: config.ai.temperature,
            referer: config.app.site_url.clone(),
            site_title: config.app.name.clone(),
        }
    }

    fn get_messages(&self, system_prompt: String, transcript: Vec<ChatMessage>) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend(transcript);
        messages
    }

    fn get_request(&self, system_prompt: String, transcript: Vec<ChatMessage>) -> OpenRouterRequest {
        OpenRouterRequest {
            model: self.model.clone(),
            messages: self.get_messages(system_prompt, transcript),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        }
    }

    async fn make_request(
        &self,
        url: String,
        request_body: OpenRouterRequest,
    ) -> Result<reqwest::Response, RelayError> {
        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            // OpenRouter attributes traffic through this header pair.
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.site_title)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RelayError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl ChatProvider for OpenRouterProvider {

    async fn chat(
        &self,
        system_prompt: String,
        transcript: Vec<ChatMessage>,
    ) -> Result<String, RelayError> {
        if self.api_key.is_empty() {
            return Err(RelayError::MissingApiKey);
        }

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, transcript);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ OpenRouter API error response ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 => RelayError::AuthenticationError(error_text),
                _ => RelayError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let payload: OpenRouterResponse = response
            .json()
            .await
            .map_err(|e| RelayError::SerializationError(e.to_string()))?;

        if let Some(usage) = &payload.usage {
            log::debug!(
                "📊 Upstream usage: {} prompt + {} completion tokens",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        payload
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| RelayError::SerializationError("No content in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_key(api_key: &str) -> OpenRouterProvider {
        let mut config = Config::default();
        config.ai.api_key = api_key.to_string();
        config.ai.model = "x-ai/grok-4.1-fast:free".to_string();
        config.ai.max_tokens = 512;
        config.ai.temperature = 0.7;
        OpenRouterProvider::from_config(&config)
    }

    #[test]
    fn request_prepends_exactly_one_system_turn() {
        let provider = provider_with_key("sk-or-test");
        let transcript = vec![ChatMessage::user("Ada kamar kosong?")];

        let request = provider.get_request("persona".to_string(), transcript);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, "persona");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "Ada kamar kosong?");
    }

    #[test]
    fn request_carries_configured_limits() {
        let provider = provider_with_key("sk-or-test");

        let request = provider.get_request("persona".to_string(), Vec::new());

        assert_eq!(request.model, "x-ai/grok-4.1-fast:free");
        assert_eq!(request.max_tokens, Some(512));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn empty_credential_short_circuits_before_any_call() {
        let provider = provider_with_key("");

        let result = provider
            .chat("persona".to_string(), vec![ChatMessage::user("halo")])
            .await;

        assert!(matches!(result, Err(RelayError::MissingApiKey)));
    }

    #[test]
    fn upstream_reply_deserializes_from_minimal_payload() {
        let payload = r#"{"choices":[{"message":{"content":"Ada, Kak!"},"finish_reason":"stop"}]}"#;

        let response: OpenRouterResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Ada, Kak!")
        );
        assert!(response.usage.is_none());
    }
}
