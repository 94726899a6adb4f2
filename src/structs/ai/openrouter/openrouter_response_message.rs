use serde::Deserialize;

// Some free-tier models return a null content field, hence the Option.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
