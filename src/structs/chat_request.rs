use serde::{Deserialize, Serialize};
use crate::structs::chat_message::ChatMessage;

/// Body of `POST /api/chat`: the full transcript the widget has so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}
