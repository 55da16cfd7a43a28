//! Scout Serve Library
//!
//! HTTP interface for the Scout profile search service.

pub mod api;
pub mod handlers;
pub mod server;

pub use handlers::*;
pub use server::*;

/// Server version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_enabled: true,
            max_request_size: 1024 * 1024, // 1MB
        }
    }
}

impl From<&scout_core::ServerSettings> for ServerConfig {
    fn from(settings: &scout_core::ServerSettings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
            cors_enabled: settings.cors_enabled,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.cors_enabled);
    }

    #[test]
    fn test_config_from_settings() {
        let settings = scout_core::ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: false,
        };
        let config = ServerConfig::from(&settings);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.cors_enabled);
    }
}
