use crate::config::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SERVER_PORT, DEFAULT_SITE_URL, DEFAULT_TEMPERATURE,
    OPENROUTER_BASE_URL, SITE_NAME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_site_name() -> String {
        SITE_NAME.to_string()
    }

    pub fn default_site_url() -> String {
        DEFAULT_SITE_URL.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_base_url() -> String {
        OPENROUTER_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_chat_enabled() -> bool {
        true
    }

    pub fn default_analytics_enabled() -> bool {
        false
    }
}
