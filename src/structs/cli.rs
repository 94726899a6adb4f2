use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "kost-web")]
#[clap(about = "Kost Citra & Tiara marketing site and chat relay", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
