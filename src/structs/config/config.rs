use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::app_config::AppConfig;
use crate::structs::config::feature_config::FeatureConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub features: FeatureConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            ai: AiConfig::default(),
            features: FeatureConfig::default(),
        }
    }
}
