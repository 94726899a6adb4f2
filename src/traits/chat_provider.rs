use async_trait::async_trait;
use crate::enums::relay_error::RelayError;
use crate::structs::chat_message::ChatMessage;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {

    /// Sends the system instruction plus the visitor transcript upstream and
    /// returns the assistant's text.
    async fn chat(&self, system_prompt: String, transcript: Vec<ChatMessage>)
        -> Result<String, RelayError>;
}
