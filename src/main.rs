use clap::Parser;
use crate::structs::cli::Cli;
use crate::workers::command_runner::CommandRunner;

mod config;
mod enums;
mod errors;
mod helpers;
mod prompts;
mod services;
mod structs;
mod traits;
mod ui;
mod workers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    CommandRunner::new().run_command(cli.command).await?;
    Ok(())
}
