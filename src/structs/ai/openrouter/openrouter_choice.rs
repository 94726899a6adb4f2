use serde::Deserialize;
use crate::structs::ai::openrouter::openrouter_response_message::OpenRouterResponseMessage;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterChoice {
    pub message: OpenRouterResponseMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}
