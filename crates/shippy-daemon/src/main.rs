// crates/shippy-daemon/src/main.rs
//
// Binary entrypoint for the Shippy consignment daemon.
//
// Parses CLI arguments, loads configuration, initializes tracing,
// constructs the in-memory repository, and serves RPC calls until Ctrl-C.

mod config;

use std::sync::Arc;

use clap::Parser;
use config::DaemonConfig;

use shippy_core::ConsignmentRepository;
use shippy_rpc::ShippingRpcServer;
use shippy_store::InMemoryConsignmentStore;

/// Shippy consignment daemon: stores consignments in memory and serves them over RPC.
#[derive(Parser, Debug)]
#[command(name = "shippy-daemon", version = "0.1.0", about = "Shippy consignment service daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.shippy/config.toml")]
    config: String,

    /// Host to bind the RPC server to (overrides the config file).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind the RPC server to (overrides the config file).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Load configuration before tracing so the file's log level can apply.
    let config_path = expand_tilde(&args.config);
    let loaded = DaemonConfig::load(&config_path).map_err(|e| e.to_string());
    let daemon_config = loaded
        .clone()
        .unwrap_or_default()
        .with_overrides(args.host.clone(), args.port);

    // Initialize tracing subscriber for structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", config_path),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path,
            e
        ),
    }

    tracing::info!("Shippy consignment daemon v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(InMemoryConsignmentStore::new());
    let repo: Arc<dyn ConsignmentRepository> = store.clone();
    let rpc_server = ShippingRpcServer::new(daemon_config.rpc_config(), repo);
    tracing::info!(
        "RPC endpoint: {}:{}",
        rpc_server.config().host,
        rpc_server.config().port
    );

    rpc_server.start_with_shutdown(shutdown_signal()).await?;

    tracing::info!(
        "Shippy daemon shut down gracefully, discarding {} consignments",
        store.len()
    );

    Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Expand `~` at the start of a path to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
