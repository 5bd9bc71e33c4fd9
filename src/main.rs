mod api;
mod cli;
mod config;
mod error;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Bare `pomo` starts the server with config-file defaults.
    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        host: None,
    });

    match command {
        Commands::Serve { port, host } => {
            tokio::runtime::Runtime::new()
                .expect("Failed to create tokio runtime")
                .block_on(async {
                    cli::serve::execute(port, host).await;
                });
        }
    }
}
