use std::sync::Arc;
use uuid::Uuid;

use crate::enums::relay_error::RelayError;
use crate::structs::chat_message::ChatMessage;
use crate::traits::chat_provider::ChatProvider;

/// Forwards visitor transcripts to the configured provider with the fixed
/// system instruction. Stateless across requests; the widget resends its
/// transcript every turn.
pub struct ChatRelay {
    provider: Arc<dyn ChatProvider>,
    system_prompt: String,
    chat_enabled: bool,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn ChatProvider>, system_prompt: String, chat_enabled: bool) -> Self {
        Self {
            provider,
            system_prompt,
            chat_enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.chat_enabled
    }

    /// One provider call per invocation; errors are logged with full detail
    /// here and surface to the caller only as `RelayError` variants.
    pub async fn forward(&self, transcript: Vec<ChatMessage>) -> Result<String, RelayError> {
        let request_id = Uuid::new_v4();
        log::info!(
            "💬 [{}] Forwarding {} transcript turns upstream",
            request_id,
            transcript.len()
        );

        match self
            .provider
            .chat(self.system_prompt.clone(), transcript)
            .await
        {
            Ok(reply) => {
                log::info!("✅ [{}] Upstream reply received ({} chars)", request_id, reply.len());
                Ok(reply)
            }
            Err(err) => {
                log::error!("❌ [{}] Relay failed: {}", request_id, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::chat_provider::MockChatProvider;

    #[tokio::test]
    async fn forward_calls_provider_exactly_once_with_system_prompt() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_chat()
            .times(1)
            .withf(|system_prompt, transcript| {
                system_prompt == "persona" && transcript.len() == 1
            })
            .returning(|_, _| Ok("Ada, Kak!".to_string()));

        let relay = ChatRelay::new(Arc::new(provider), "persona".to_string(), true);
        let reply = relay
            .forward(vec![ChatMessage::user("Ada kamar kosong?")])
            .await
            .unwrap();

        assert_eq!(reply, "Ada, Kak!");
    }

    #[tokio::test]
    async fn forward_returns_upstream_text_unmodified() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_chat()
            .returning(|_, _| Ok("  spasi dan emoji 🏠 tetap utuh  ".to_string()));

        let relay = ChatRelay::new(Arc::new(provider), "persona".to_string(), true);
        let reply = relay.forward(vec![ChatMessage::user("halo")]).await.unwrap();

        assert_eq!(reply, "  spasi dan emoji 🏠 tetap utuh  ");
    }

    #[tokio::test]
    async fn forward_propagates_provider_errors_without_retry() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_chat()
            .times(1)
            .returning(|_, _| Err(RelayError::ApiError("HTTP 503: upstream down".to_string())));

        let relay = ChatRelay::new(Arc::new(provider), "persona".to_string(), true);
        let result = relay.forward(vec![ChatMessage::user("halo")]).await;

        assert!(matches!(result, Err(RelayError::ApiError(_))));
    }
}
