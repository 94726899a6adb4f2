use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "ConfigHelper::default_site_name")]
    pub name: String,

    #[serde(default = "ConfigHelper::default_site_url")]
    pub site_url: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: ConfigHelper::default_site_name(),
            site_url: ConfigHelper::default_site_url(),
            port: ConfigHelper::default_port(),
        }
    }
}
