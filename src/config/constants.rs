use std::time::Duration;

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "x-ai/grok-4.1-fast:free";
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const SITE_NAME: &str = "Kost Citra & Tiara";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

pub const MIN_MAX_TOKENS: u32 = 1;
pub const MAX_MAX_TOKENS: u32 = 4096;
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 1.0;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const SITE_URL_ENV: &str = "SITE_URL";
pub const MODEL_ENV: &str = "AI_MODEL";
pub const MAX_TOKENS_ENV: &str = "AI_MAX_TOKENS";
pub const TEMPERATURE_ENV: &str = "AI_TEMPERATURE";
pub const CHAT_ENABLED_ENV: &str = "CHAT_ENABLED";
pub const ANALYTICS_ENABLED_ENV: &str = "ANALYTICS_ENABLED";
pub const PORT_ENV: &str = "KOST_WEB_PORT";
pub const CONFIG_PATH_ENV: &str = "KOST_WEB_CONFIG";

pub const CONFIG_FILE_NAME: &str = "kost-web.toml";

// Fixed visitor-facing strings. Upstream error detail stays in the server log.
pub const GENERIC_CHAT_ERROR: &str = "Gagal memproses pesan. Silakan coba lagi.";
pub const CONFIG_CHAT_ERROR: &str = "Layanan chat sedang tidak tersedia.";
pub const CONNECTION_FALLBACK: &str = "Maaf, koneksi bermasalah.";

pub const ANALYTICS_SNIPPET: &str =
    r#"<script defer data-domain="kostcitratiara.com" src="https://plausible.io/js/script.js"></script>"#;

pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
