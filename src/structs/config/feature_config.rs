use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeatureConfig {
    #[serde(default = "ConfigHelper::default_chat_enabled")]
    pub chat_enabled: bool,

    #[serde(default = "ConfigHelper::default_analytics_enabled")]
    pub analytics_enabled: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            chat_enabled: ConfigHelper::default_chat_enabled(),
            analytics_enabled: ConfigHelper::default_analytics_enabled(),
        }
    }
}
