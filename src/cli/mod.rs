//! CLI module

pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(version)]
#[command(about = "ToDo list + Pomodoro timer over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind (overrides the config file)
        #[arg(long)]
        host: Option<String>,
    },
}
