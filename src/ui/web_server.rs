use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::Filter;

use crate::config::constants::{
    ANALYTICS_SNIPPET, CONFIG_CHAT_ERROR, GENERIC_CHAT_ERROR, SERVER_SHUTDOWN_GRACE_PERIOD_MS,
    sleep_duration_millis,
};
use crate::config::kost_data::KOST_INFO;
use crate::errors::{KostWebError, KostWebResult};
use crate::services::relay::ChatRelay;
use crate::structs::chat_request::ChatRequest;
use crate::structs::config::config::Config;
use crate::structs::kost::kost_info::KostInfo;

pub struct WebServer {
    relay: Arc<ChatRelay>,
    config: Config,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl WebServer {
    pub fn new(relay: Arc<ChatRelay>, config: Config) -> Self {
        Self {
            relay,
            config,
            shutdown_tx: None,
        }
    }

    pub async fn start(&mut self, port: u16) -> KostWebResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = build_routes(Arc::clone(&self.relay), self.config.clone());

        let addr: SocketAddr = ([0, 0, 0, 0], port).into();
        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| KostWebError::system_error("bind", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Web server listening on http://{}", bound);
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> KostWebResult<()> {
        log::info!("🛑 Shutting down web server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| KostWebError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Web server shutdown complete");

        Ok(())
    }
}

pub fn build_routes(
    relay: Arc<ChatRelay>,
    config: Config,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let relay_filter = warp::any().map(move || Arc::clone(&relay));

    let index_config = config.clone();
    let index = warp::path::end()
        .and(warp::get())
        .map(move || warp::reply::html(render_index(&KOST_INFO, &index_config)));

    let chat = warp::path!("api" / "chat")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(relay_filter)
        .and_then(chat_handler);

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .and_then(health_handler);

    let static_files = warp::path("static").and(warp::fs::dir("src/ui/static"));

    index
        .or(chat)
        .or(health)
        .or(static_files)
        .with(
            warp::cors()
                .allow_origin(config.app.site_url.as_str())
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]),
        )
}

/// Every failure surfaces as one of the two fixed Indonesian payloads with
/// status 500; upstream detail never reaches the visitor.
async fn chat_handler(body: Bytes, relay: Arc<ChatRelay>) -> Result<impl warp::Reply, Infallible> {
    if !relay.is_enabled() {
        return Ok(error_reply(CONFIG_CHAT_ERROR));
    }

    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::error!("❌ Rejected malformed chat request body: {}", e);
            return Ok(error_reply(GENERIC_CHAT_ERROR));
        }
    };

    match relay.forward(request.messages).await {
        Ok(message) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "message": message })),
            StatusCode::OK,
        )),
        Err(err) if err.is_configuration() => Ok(error_reply(CONFIG_CHAT_ERROR)),
        Err(_) => Ok(error_reply(GENERIC_CHAT_ERROR)),
    }
}

async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

fn error_reply(message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

// Template is embedded at compile time; the room and highlight sections are
// rendered from the static business data.
fn render_index(kost: &KostInfo, config: &Config) -> String {
    let highlights_html: String = kost
        .highlights
        .iter()
        .map(|highlight| format!(r#"<div class="highlight"><p>{}</p></div>"#, highlight))
        .collect();

    let rooms_html: String = kost
        .rooms
        .iter()
        .map(|room| {
            let features: String = room
                .features
                .iter()
                .map(|feature| format!("<li>{}</li>", feature))
                .collect();
            format!(
                r#"<article class="room">
  <img src="{image}" alt="{name}" loading="lazy">
  <h3>{name}</h3>
  <p class="price">{price}</p>
  <ul>{features}</ul>
  <p class="availability">{available} rooms available</p>
</article>"#,
                image = room.image,
                name = room.name,
                price = room.price,
                features = features,
                available = room.available,
            )
        })
        .collect();

    let widget_script = if config.features.chat_enabled {
        r#"<script src="/static/widget.js" defer></script>"#
    } else {
        ""
    };

    let analytics_snippet = if config.features.analytics_enabled {
        ANALYTICS_SNIPPET
    } else {
        ""
    };

    include_str!("static/index.html")
        .replace("{{SITE_NAME}}", kost.name)
        .replace("{{TAGLINE}}", kost.tagline)
        .replace("{{DESCRIPTION}}", kost.description)
        .replace("{{HIGHLIGHTS}}", &highlights_html)
        .replace("{{ROOMS}}", &rooms_html)
        .replace("{{ADDRESS}}", kost.location.address)
        .replace("{{WHATSAPP}}", kost.contact.whatsapp)
        .replace("{{EMAIL}}", kost.contact.email)
        .replace("{{INSTAGRAM}}", kost.contact.instagram)
        .replace("{{MAP_LAT}}", &kost.location.lat.to_string())
        .replace("{{MAP_LNG}}", &kost.location.lng.to_string())
        .replace("{{MAP_ZOOM}}", &kost.location.map_zoom.to_string())
        .replace("{{WIDGET_SCRIPT}}", widget_script)
        .replace("{{ANALYTICS_SNIPPET}}", analytics_snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::relay_error::RelayError;
    use crate::services::openrouter::OpenRouterProvider;
    use crate::structs::chat_message::ChatMessage;
    use crate::traits::chat_provider::MockChatProvider;

    fn test_config(chat_enabled: bool) -> Config {
        let mut config = Config::default();
        config.ai.api_key = "sk-or-test".to_string();
        config.features.chat_enabled = chat_enabled;
        config
    }

    fn relay_with(provider: MockChatProvider, enabled: bool) -> Arc<ChatRelay> {
        Arc::new(ChatRelay::new(
            Arc::new(provider),
            "persona".to_string(),
            enabled,
        ))
    }

    fn transcript_body() -> serde_json::Value {
        json!({ "messages": [{ "role": "user", "content": "Ada kamar kosong?" }] })
    }

    #[tokio::test]
    async fn chat_returns_upstream_text_unmodified() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_chat()
            .times(1)
            .returning(|_, _| Ok("Ada, Kak!".to_string()));

        let routes = build_routes(relay_with(provider, true), test_config(true));
        let response = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .json(&transcript_body())
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["message"], "Ada, Kak!");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_fixed_generic_error() {
        let mut provider = MockChatProvider::new();
        provider.expect_chat().times(1).returning(|_, _| {
            Err(RelayError::ApiError(
                "HTTP 502: {\"detail\":\"model overloaded\"}".to_string(),
            ))
        });

        let routes = build_routes(relay_with(provider, true), test_config(true));
        let response = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .json(&transcript_body())
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], GENERIC_CHAT_ERROR);
        // Upstream detail must never leak into the payload.
        assert!(!String::from_utf8_lossy(response.body()).contains("overloaded"));
    }

    #[tokio::test]
    async fn missing_credential_returns_config_error_without_outbound_call() {
        let config = Config::default();
        let provider = OpenRouterProvider::from_config(&config);
        let relay = Arc::new(ChatRelay::new(
            Arc::new(provider),
            "persona".to_string(),
            true,
        ));

        let routes = build_routes(relay, config);
        let response = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .json(&transcript_body())
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], CONFIG_CHAT_ERROR);
    }

    #[tokio::test]
    async fn disabled_chat_short_circuits_before_provider() {
        let mut provider = MockChatProvider::new();
        provider.expect_chat().times(0);

        let routes = build_routes(relay_with(provider, false), test_config(false));
        let response = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .json(&transcript_body())
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], CONFIG_CHAT_ERROR);
    }

    #[tokio::test]
    async fn malformed_body_becomes_generic_500() {
        let mut provider = MockChatProvider::new();
        provider.expect_chat().times(0);

        let routes = build_routes(relay_with(provider, true), test_config(true));
        let response = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .body("definitely not json")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], GENERIC_CHAT_ERROR);
    }

    #[tokio::test]
    async fn provider_receives_system_prompt_and_full_transcript() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_chat()
            .times(1)
            .withf(|system_prompt, transcript| {
                system_prompt == "persona"
                    && transcript.len() == 2
                    && transcript[0].role == "user"
                    && transcript[1].role == "assistant"
            })
            .returning(|_, _| Ok("Sip, Kak!".to_string()));

        let body = json!({ "messages": [
            { "role": "user", "content": "Ada kamar kosong?" },
            { "role": "assistant", "content": "Ada, Kak!" },
        ] });

        let routes = build_routes(relay_with(provider, true), test_config(true));
        let response = warp::test::request()
            .method("POST")
            .path("/api/chat")
            .json(&body)
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let provider = MockChatProvider::new();
        let routes = build_routes(relay_with(provider, true), test_config(true));

        let response = warp::test::request()
            .method("GET")
            .path("/api/health")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn index_renders_rooms_and_includes_widget_when_enabled() {
        let provider = MockChatProvider::new();
        let routes = build_routes(relay_with(provider, true), test_config(true));

        let response = warp::test::request().method("GET").path("/").reply(&routes).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8_lossy(response.body()).to_string();
        assert!(html.contains("Kost Citra & Tiara"));
        assert!(html.contains("Citra Standard"));
        assert!(html.contains("/static/widget.js"));
        assert!(!html.contains("{{"));
    }

    #[tokio::test]
    async fn index_omits_widget_when_chat_disabled() {
        let provider = MockChatProvider::new();
        let routes = build_routes(relay_with(provider, false), test_config(false));

        let response = warp::test::request().method("GET").path("/").reply(&routes).await;

        let html = String::from_utf8_lossy(response.body()).to_string();
        assert!(!html.contains("/static/widget.js"));
    }

    // ChatMessage is the wire shape in both directions; keep it symmetric.
    #[test]
    fn chat_request_round_trips_role_tags() {
        let body = serde_json::to_string(&ChatRequest {
            messages: vec![ChatMessage::user("halo"), ChatMessage::assistant("hai")],
        })
        .unwrap();

        let parsed: ChatRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.messages[0].role, "user");
        assert_eq!(parsed.messages[1].role, "assistant");
    }
}
