//! Pack calculator service binary.
//!
//! Loads the catalog config (path from the first CLI argument, defaulting
//! to `configs/packs.toml`), then serves the calculation API until SIGINT
//! or SIGTERM.

use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use packplan_config::CatalogConfig;
use packplan_service::api::{self, AppState};

const DEFAULT_CONFIG_PATH: &str = "configs/packs.toml";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("packplan_service=info,packplan_solver=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match CatalogConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            error!(path = %config_path, error = %err, "could not load catalog config");
            std::process::exit(1);
        }
    };
    let pack_sizes = match config.validated_sizes() {
        Ok(sizes) => sizes,
        Err(err) => {
            error!(path = %config_path, error = %err, "invalid catalog config");
            std::process::exit(1);
        }
    };
    info!(path = %config_path, catalog = ?pack_sizes, "catalog loaded");

    // CORS is wide open for browser clients; the service holds no
    // credentials or per-user state.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(AppState::new(pack_sizes)).layer(cors);

    let bind_addr = config.server.bind_addr;
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %bind_addr, error = %err, "could not bind listener");
            std::process::exit(1);
        }
    };
    info!(addr = %bind_addr, "pack calculator listening");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %err, "server error");
        std::process::exit(1);
    }
    info!("server exited");
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}
