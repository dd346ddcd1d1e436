// ABOUTME: Configuration parsing from TOML file with environment variable overrides
// ABOUTME: API base URL and WebSocket URL fall back to local defaults when unset

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sitepulse_core::ReconnectConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub live: LiveConfig,
    #[serde(default)]
    pub poll: PollConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin; request paths already start with /api
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveConfig {
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Default refresh cadence for watched feeds (0 = fetch once)
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_ws_url() -> String {
    "ws://localhost:8000/ws/dashboard".to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    5000
}

fn default_refresh_interval_ms() -> u64 {
    30_000
}

impl Config {
    /// Find the config file, checking in order:
    /// 1. SITEPULSE_CONFIG_PATH env var (if set)
    /// 2. ./sitepulse.toml
    /// 3. ~/.config/sitepulse/sitepulse.toml
    fn find_config_file() -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var("SITEPULSE_CONFIG_PATH") {
            let path = PathBuf::from(&env_path);
            if path.exists() {
                return Some(path);
            }
            tracing::warn!(path = %env_path, "SITEPULSE_CONFIG_PATH does not exist, ignoring");
        }

        let local_config = PathBuf::from(paths::CONFIG_FILE_NAME);
        if local_config.exists() {
            return Some(local_config);
        }

        let xdg_config = paths::config_file();
        if xdg_config.exists() {
            return Some(xdg_config);
        }

        None
    }

    /// Load configuration from file (if any) with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if let Some(config_path) = Self::find_config_file() {
            tracing::info!(
                path = %config_path.display(),
                "Loading configuration from file"
            );
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            tracing::debug!("No config file found, using environment variables and defaults");
            Config::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(content)?)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SITEPULSE_API_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("SITEPULSE_WS_URL") {
            self.live.ws_url = val;
        }
        if let Ok(val) = std::env::var("SITEPULSE_RECONNECT_MS") {
            self.live.reconnect_delay_ms = val
                .parse()
                .with_context(|| format!("SITEPULSE_RECONNECT_MS is not a number: {}", val))?;
        }
        if let Ok(val) = std::env::var("SITEPULSE_REFRESH_MS") {
            self.poll.refresh_interval_ms = val
                .parse()
                .with_context(|| format!("SITEPULSE_REFRESH_MS is not a number: {}", val))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let api = url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;
        if !matches!(api.scheme(), "http" | "https") {
            anyhow::bail!("API base URL must use http or https: {}", self.api.base_url);
        }

        let ws = url::Url::parse(&self.live.ws_url)
            .with_context(|| format!("Invalid WebSocket URL: {}", self.live.ws_url))?;
        if !matches!(ws.scheme(), "ws" | "wss") {
            anyhow::bail!("WebSocket URL must use ws or wss: {}", self.live.ws_url);
        }

        if self.live.reconnect_delay_ms == 0 {
            anyhow::bail!("live.reconnect_delay_ms must be greater than zero");
        }
        Ok(())
    }

    /// Fixed reconnect delay for the live channel
    pub fn reconnect(&self) -> ReconnectConfig {
        ReconnectConfig::fixed(Duration::from_millis(self.live.reconnect_delay_ms))
    }

    /// Default feed refresh cadence, None when polling is disabled
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.poll.refresh_interval_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
