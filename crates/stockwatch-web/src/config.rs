//! Application configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `<config dir>/default.toml` (optional)
//! 3. `<config dir>/local.toml` (optional)
//! 4. `STOCKWATCH__<SECTION>__<KEY>` environment variables, after loading `.env`
//!
//! `STOCKWATCH__WATCHLIST__SYMBOLS` takes a comma separated list.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stockwatch_core::adapters::yahoo::DEFAULT_BASE_URL;
use stockwatch_core::http_client::DEFAULT_TIMEOUT_MS;
use stockwatch_core::watchlist::DEFAULT_SYMBOLS;
use stockwatch_core::{ValidationError, Watchlist, YahooConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid watchlist: {0}")]
    Watchlist(#[from] ValidationError),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub watchlist: WatchlistConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Quote provider connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WatchlistConfig {
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
fn default_user_agent() -> String {
    concat!("stockwatch/", env!("CARGO_PKG_VERSION")).to_string()
}
fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from `dir`, `.env` and the environment.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::File::from(dir.join("default.toml")).required(false))
            .add_source(config::File::from(dir.join("local.toml")).required(false))
            .add_source(
                config::Environment::with_prefix("STOCKWATCH")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("watchlist.symbols")
                    .try_parsing(true),
            )
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    pub fn watchlist(&self) -> Result<Watchlist, ConfigError> {
        Ok(Watchlist::parse(&self.watchlist.symbols)?)
    }

    pub fn yahoo(&self) -> YahooConfig {
        YahooConfig {
            base_url: self.provider.base_url.clone(),
            timeout_ms: self.provider.timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_files_yield_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load(dir.path()).expect("config should load");

        assert_eq!(config.provider.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.watchlist.symbols.len(), 10);
        assert_eq!(config.watchlist().expect("valid").symbols().len(), 10);
    }

    #[test]
    fn local_file_overrides_default_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nbind = \"0.0.0.0:8080\"\n[provider]\ntimeout_ms = 2500\n",
        )
        .expect("write default");
        fs::write(
            dir.path().join("local.toml"),
            "[provider]\ntimeout_ms = 900\n[watchlist]\nsymbols = [\"NVDA\", \"AMD\"]\n",
        )
        .expect("write local");

        let config = AppConfig::load(dir.path()).expect("config should load");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.yahoo().timeout_ms, 900);
        assert_eq!(config.yahoo().base_url, DEFAULT_BASE_URL);

        let watchlist = config.watchlist().expect("valid watchlist");
        let symbols = watchlist
            .symbols()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>();
        assert_eq!(symbols, ["NVDA", "AMD"]);
    }

    #[test]
    fn empty_watchlist_is_a_config_error() {
        let config = AppConfig {
            watchlist: WatchlistConfig { symbols: vec![] },
            ..AppConfig::default()
        };
        assert!(matches!(
            config.watchlist(),
            Err(ConfigError::Watchlist(ValidationError::EmptyWatchlist))
        ));
    }
}
