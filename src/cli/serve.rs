//! Serve CLI command

use crate::api;
use crate::config;
use crate::store::AppState;

/// Execute the serve command. Flags beat the config file, which beats the
/// built-in defaults.
pub async fn execute(port: Option<u16>, host: Option<String>) {
    let cfg = config::load_config();
    let port = port.unwrap_or(cfg.server.port);
    let host = host.unwrap_or(cfg.server.host);

    let state = AppState::new();

    println!("pomo API server: http://{}:{}", host, port);
    println!("Press Ctrl+C to stop");

    if let Err(e) = api::start_server(&host, port, state).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
