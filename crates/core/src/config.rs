//! Configuration types for the Scout core library

use crate::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
    /// External profile provider settings
    pub provider: ProviderConfig,
    /// Dataset cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

impl ScoutConfig {
    /// Load configuration from an optional TOML file plus environment
    ///
    /// Environment variables use the `SCOUT` prefix with `__` as the level
    /// separator, e.g. `SCOUT__PROVIDER__TOKEN`. Environment values
    /// override file values. Fails when the provider credential is missing
    /// or blank; the token is never embedded in code.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SCOUT")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if self.provider.token.trim().is_empty() {
            return Err(ScoutError::Config(config::ConfigError::NotFound(
                "provider.token".to_string(),
            )));
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ScoutError::Config(config::ConfigError::NotFound(
                "provider.base_url".to_string(),
            )));
        }
        url::Url::parse(&self.provider.base_url).map_err(|e| {
            ScoutError::Config(config::ConfigError::Message(format!(
                "provider.base_url is not a valid URL: {}",
                e
            )))
        })?;
        Ok(())
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether to add a permissive CORS layer
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
        }
    }
}

/// External profile provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider API base URL
    #[serde(default)]
    pub base_url: String,
    /// Bearer credential, injected via file or environment
    #[serde(default)]
    pub token: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Dataset cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached datasets; `None` means unbounded
    ///
    /// Left unbounded by default so cache-hit behavior is stable for the
    /// process lifetime.
    #[serde(default)]
    pub max_capacity: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
