use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::config::kost_data::KOST_INFO;
use crate::enums::commands::Commands;
use crate::errors::{KostWebError, KostWebResult};
use crate::prompts::assistant_prompt::assistant_system_prompt;
use crate::services::chat_session::ChatSession;
use crate::services::openrouter::OpenRouterProvider;
use crate::services::relay::ChatRelay;
use crate::structs::config::config::Config;
use crate::ui::web_server::WebServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> KostWebResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { port, open } => self.serve_command(port, open).await,
            Commands::Chat => self.chat_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Init => self.init_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn serve_command(&self, port: Option<u16>, open: bool) -> KostWebResult<()> {
        log::info!("🚀 Starting Kost Citra & Tiara web service...");

        let config = ConfigManager::load()?;

        // Problems are logged in full but do not stop the server; the chat
        // endpoint refuses requests on its own when the credential is absent.
        let validation = ConfigManager::validate_config(&config);
        validation.log_summary();

        let port = port.unwrap_or(config.app.port);
        let relay = build_relay(&config);

        let mut server = WebServer::new(relay, config);
        let addr = server.start(port).await?;

        if open {
            let url = format!("http://localhost:{}", addr.port());
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        log::info!("🛑 Press Ctrl-C to stop");
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| KostWebError::system_error("wait for shutdown signal", &e.to_string()))?;

        server.shutdown().await?;
        Ok(())
    }

    async fn chat_command(&self) -> KostWebResult<()> {
        let config = ConfigManager::load()?;
        let validation = ConfigManager::validate_config(&config);
        validation.log_summary();

        let relay = build_relay(&config);
        let mut session = ChatSession::new();

        println!("💬 Chat with Mbak Citra (type 'exit' to quit)");
        println!("Halo Kak! Mau tanya soal kamar kosong?");

        let stdin = io::stdin();
        loop {
            print!("you> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let line = line.trim();
            if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                break;
            }

            if let Some(reply) = session.submit(line, &relay).await {
                println!("mbak citra> {}", reply.content);
            }
        }

        Ok(())
    }

    async fn validate_command(&self) -> KostWebResult<()> {
        log::info!("🔧 Validating configuration...");

        let config = ConfigManager::load()?;
        let validation = ConfigManager::validate_config(&config);
        validation.print_summary();

        if validation.is_valid() {
            Ok(())
        } else {
            Err(KostWebError::config_error(
                "Configuration validation failed",
                None,
                Some("Fix the fields listed above and re-run 'kost-web validate'"),
            ))
        }
    }

    async fn init_command(&self) -> KostWebResult<()> {
        log::info!("🚀 Initializing kost-web configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Created sample config at: {}", path.display());
                log::info!("📝 Set OPENROUTER_API_KEY before starting the server.");
                log::info!("🔧 Run 'kost-web validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }
}

fn build_relay(config: &Config) -> Arc<ChatRelay> {
    let provider = Arc::new(OpenRouterProvider::from_config(config));
    let system_prompt = assistant_system_prompt(&KOST_INFO);
    Arc::new(ChatRelay::new(
        provider,
        system_prompt,
        config.features.chat_enabled,
    ))
}
