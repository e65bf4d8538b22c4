mod api;
mod metrics;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basketeer_core::{
    load_config, validate_config, BasketPlanner, CatalogSource, Config, HighsSolver, MilpSolver,
    TarkovDevClient,
};

use api::create_router;
use state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Basketeer v{}", VERSION);

    // Load configuration. An explicitly configured path must exist; the
    // default path falls back to defaults when absent since every section
    // has usable defaults.
    let explicit_path = std::env::var("BASKETEER_CONFIG").map(PathBuf::from).ok();
    let config = match &explicit_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => {
            let path = PathBuf::from("config.toml");
            if path.exists() {
                load_config(&path)
                    .with_context(|| format!("Failed to load config from {:?}", path))?
            } else {
                info!("No config file found, using defaults");
                Config::default()
            }
        }
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Catalog source: {}", config.catalog.url);
    info!("Solver binary: {}", config.solver.binary);

    // Compute config fingerprint for startup correlation
    let config_json = serde_json::to_string(&config).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    info!("Config hash: {}", &config_hash[..16]);

    // Wire up the seams
    let source: Arc<dyn CatalogSource> = Arc::new(TarkovDevClient::new(config.catalog.clone()));
    let solver: Arc<dyn MilpSolver> = Arc::new(HighsSolver::new(config.solver.clone()));
    let planner = BasketPlanner::new(config.planner.clone(), solver);

    let state = Arc::new(AppState::new(config.clone(), source, planner));

    // Prime the catalog cache; failure is not fatal, the cache can be
    // refreshed later through the API.
    match state.refresh_catalog().await {
        Ok(count) => info!("Catalog primed with {} items", count),
        Err(e) => warn!(
            "Initial catalog fetch failed: {}; starting with an empty catalog",
            e
        ),
    }

    // Start the server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let router = create_router(Arc::clone(&state));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl-c, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
