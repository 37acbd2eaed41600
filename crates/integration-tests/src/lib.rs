//! Integration tests for Lumina.
//!
//! Each test spawns the server on an ephemeral port and drives it over HTTP
//! with reqwest, the way the browser front-end would. The servers run in
//! degraded mode (no `GEMINI_API_KEY`), so the AI endpoints answer with
//! their fixed placeholder strings and no network is touched.
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart lifecycle over HTTP
//! - `admin_inventory` - Admin product management and dashboard
//! - `assistant_degraded` - Chat and description endpoints without a credential

#![cfg_attr(not(test), forbid(unsafe_code))]

use lumina_server::config::ServerConfig;
use lumina_server::routes;
use lumina_server::state::AppState;

/// A server spawned on an ephemeral port plus a client to talk to it.
pub struct TestServer {
    /// Base URL of the spawned server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    /// HTTP client for issuing requests.
    pub client: reqwest::Client,
}

impl TestServer {
    /// Spawn the app with a degraded-mode configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("valid host"),
            port: 0,
            gemini: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        let state = AppState::new(config);
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// Absolute URL for a path on the spawned server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
