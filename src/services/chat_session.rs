use crate::config::constants::CONNECTION_FALLBACK;
use crate::services::relay::ChatRelay;
use crate::structs::chat_message::ChatMessage;

/// In-memory transcript with the same turn-taking behavior as the site chat
/// widget: lives for one session, never persisted.
#[derive(Default)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Ignores empty input. Otherwise appends the user turn, sends the whole
    /// transcript through the relay, and appends either the assistant reply
    /// or the fixed fallback line. Returns the appended assistant turn.
    pub async fn submit(&mut self, input: &str, relay: &ChatRelay) -> Option<&ChatMessage> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(trimmed));

        let reply = match relay.forward(self.transcript.clone()).await {
            Ok(text) => text,
            Err(err) => {
                log::error!("❌ Chat session send failed: {}", err);
                CONNECTION_FALLBACK.to_string()
            }
        };

        self.transcript.push(ChatMessage::assistant(reply));
        self.transcript.last()
    }
}
