//! Server module for the Scout serve crate

use crate::api::create_routes;
use crate::handlers::AppState;
use crate::ServerConfig;
use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use scout_core::{
    HttpDatasetFetcher, MokaDatasetCache, Result, ScoutConfig, ScoutError, SearchService,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Scout HTTP server
pub struct ScoutServer {
    config: ServerConfig,
    app: Router,
}

impl ScoutServer {
    /// Create a server instance from full service configuration
    ///
    /// Builds the provider fetcher, dataset cache, and search service the
    /// handlers share.
    pub fn new(config: &ScoutConfig) -> Result<Self> {
        let fetcher = HttpDatasetFetcher::new(&config.provider)
            .map_err(|e| ScoutError::internal(format!("failed to build fetcher: {e}")))?;
        let cache = MokaDatasetCache::new(&config.cache);
        let service = Arc::new(SearchService::new(Arc::new(fetcher), Arc::new(cache)));

        let server_config = ServerConfig::from(&config.server);
        let state = AppState::new(service, server_config.clone());
        let app = create_app(state, &server_config);

        Ok(Self {
            config: server_config,
            app,
        })
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let socket_addr: SocketAddr = addr.parse().map_err(|e| {
            ScoutError::invalid_parameter("server.host", format!("invalid address {addr}: {e}"))
        })?;

        tracing::info!("Starting Scout server on {}", addr);

        let listener = tokio::net::TcpListener::bind(socket_addr)
            .await
            .map_err(|e| ScoutError::internal(format!("failed to bind to {addr}: {e}")))?;

        axum::serve(listener, self.app)
            .await
            .map_err(|e| ScoutError::internal(format!("server error: {e}")))?;

        Ok(())
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Create the Axum application with middleware
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = create_routes().with_state(state);

    app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.max_request_size)),
    );

    if config.cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin("*".parse::<HeaderValue>().expect("static origin"))
            .allow_methods([Method::GET])
            .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE]);

        app = app.layer(cors);
    }

    app
}

/// Server builder for configuration
pub struct ServerBuilder {
    config: ScoutConfig,
}

impl ServerBuilder {
    /// Create a builder over loaded service configuration
    pub fn new(config: ScoutConfig) -> Self {
        Self { config }
    }

    /// Set the host address
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Enable or disable CORS
    pub fn cors(mut self, enabled: bool) -> Self {
        self.config.server.cors_enabled = enabled;
        self
    }

    /// Build the server
    pub fn build(self) -> Result<ScoutServer> {
        ScoutServer::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::ProviderConfig;

    fn test_config() -> ScoutConfig {
        ScoutConfig {
            provider: ProviderConfig {
                base_url: "https://provider.example.com".to_string(),
                token: "test-token".to_string(),
                timeout_secs: 5,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_server_builder_overrides() {
        let server = ServerBuilder::new(test_config())
            .host("0.0.0.0")
            .port(8080)
            .cors(false)
            .build()
            .unwrap();

        assert_eq!(server.config().host, "0.0.0.0");
        assert_eq!(server.config().port, 8080);
        assert!(!server.config().cors_enabled);
    }

    #[test]
    fn test_server_new_uses_settings() {
        let server = ScoutServer::new(&test_config()).unwrap();
        assert_eq!(server.config().host, "127.0.0.1");
        assert_eq!(server.config().port, 3000);
    }
}
