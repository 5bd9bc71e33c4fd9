//! Application configuration.
//!
//! Loaded from `~/.pomo/config.toml`. A missing or unreadable file falls back
//! to defaults; CLI flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default port for the API server
pub const DEFAULT_PORT: u16 = 7878;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Application config
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server defaults (CLI flags take precedence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// Path to ~/.pomo
fn pomo_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pomo")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the config file at a specific path (missing or invalid → defaults)
fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring config file {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Load the user config (missing file → defaults)
pub fn load_config() -> Config {
    load_config_from(&pomo_dir().join("config.toml"))
}
