use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (site pages + chat relay)
    Serve {
        /// Port to listen on; falls back to the configured port
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the site in the default browser once listening
        #[clap(long)]
        open: bool,
    },
    /// Talk to the configured assistant from the terminal
    Chat,
    /// Check the configuration and report every problem found
    Validate,
    /// Write a sample kost-web.toml to the current directory
    Init,
}
