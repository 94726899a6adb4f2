use serde::Deserialize;
use crate::structs::ai::openrouter::openrouter_choice::OpenRouterChoice;
use crate::structs::ai::openrouter::openrouter_usage::OpenRouterUsage;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterResponse {
    pub choices: Vec<OpenRouterChoice>,

    #[serde(default)]
    pub usage: Option<OpenRouterUsage>,
}
