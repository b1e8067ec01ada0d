use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingSection,
    pub secret_key: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            logging: LoggingSection::default(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Sources, later ones winning: `config.toml` (or the file named by
    /// `ANNUAIRE_CONFIG`) if present, `ANNUAIRE_*` environment variables, and
    /// finally the bare `PORT`, `SECRET_KEY` and `APP_ENV` variables that make
    /// up the original process contract.
    pub fn load() -> Result<Self> {
        let config_path = env::var("ANNUAIRE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ANNUAIRE")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // The environment source splits key paths on '_', so snake_case keys
        // never reach the builder; they are applied by hand.
        if let Ok(base_url) = env::var("ANNUAIRE_UPSTREAM_BASE_URL") {
            config.upstream.base_url = base_url;
        }
        if let Ok(timeout) = env::var("ANNUAIRE_UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = timeout
                .parse()
                .context("invalid ANNUAIRE_UPSTREAM_TIMEOUT_SECS")?;
        }
        if let Ok(secret) = env::var("ANNUAIRE_SECRET_KEY") {
            config.secret_key = secret;
        }

        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse().context("invalid PORT")?;
        }
        if let Ok(secret) = env::var("SECRET_KEY") {
            config.secret_key = secret;
        }
        if let Ok(app_env) = env::var("APP_ENV") {
            config.debug = app_env == "development";
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = if config.debug { "debug" } else { "info" }.to_string();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Where and how to reach the external user directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
