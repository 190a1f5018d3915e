mod config;

use crate::App;
use dioxus::prelude::*;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::sync::OnceCell;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

pub use config::ServerConfig;

static SERVER_CONFIG: OnceCell<ServerConfig> = OnceCell::const_new();
static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::const_new();

/// Shared configuration, loaded from the environment on first use.
pub async fn server_config() -> &'static ServerConfig {
    SERVER_CONFIG
        .get_or_init(|| async {
            ServerConfig::load().expect("Failed to load server configuration")
        })
        .await
}

/// Shared HTTP client for all outbound Steam requests.
pub async fn http_client() -> &'static reqwest::Client {
    HTTP_CLIENT
        .get_or_init(|| async { reqwest::Client::new() })
        .await
}

#[instrument]
pub(crate) async fn launch_server() {
    // Initialise tracing (respects RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the address the server should run on. If the CLI is running, the CLI proxies fullstack into the main address
    // and we use the generated address the CLI gives us
    let ip =
        dioxus::cli_config::server_ip().unwrap_or_else(|| IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)));
    let port = dioxus::cli_config::server_port().unwrap_or(8080);
    let address = SocketAddr::new(ip, port);
    tracing::info!(%address, "starting GamesTrackers server");

    let listener = tokio::net::TcpListener::bind(address).await.unwrap();
    let router = axum::Router::new()
        // serve_dioxus_application adds routes to server side render the application, serve static assets, and register server functions
        .serve_dioxus_application(ServeConfig::new().unwrap(), App)
        .into_make_service();
    axum::serve(listener, router).await.unwrap();
}
