//! Status endpoint service entry point.

use std::net::SocketAddr;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ml_service::api::{create_router, AppState};
use ml_service::config::Config;
use ml_service::error::ServiceError;
use ml_service::metrics;
use ml_service::store::StoreHandle;
use ml_service::utils::shutdown_signal;

/// Status endpoint service for the ML pipeline.
#[derive(Parser, Debug)]
#[command(name = "ml-service")]
#[command(about = "HTTP status service reporting Redis connectivity")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Probe the store once and report the result.
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("ml_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Ping) => cmd_ping().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ML SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Parse the store URL
    print!("Parsing store URL... ");
    let store = match StoreHandle::new(&config) {
        Ok(s) => {
            println!("OK");
            s
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Store URL invalid"));
        }
    };

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Redis URL: {}", store.redacted_url());
    println!("  Probe Timeout: {}ms", config.probe_timeout_ms);
    println!("  HTTP Port: {}", config.port);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Probe the store once and report the result.
async fn cmd_ping() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ML SERVICE - STORE PING");
    println!("======================================================================");

    // Load configuration
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Parse the store URL
    print!("\n1. Parsing store URL... ");
    let store = StoreHandle::new(&config)?;
    println!("OK");
    println!("   Store: {}", store.redacted_url());

    // Probe the store
    print!("\n2. Probing store... ");
    let start = Instant::now();
    match store.ping().await {
        Ok(()) => {
            println!("OK");
            println!("   Status: connected");
            println!("   Latency: {}ms", start.elapsed().as_millis());
        }
        Err(e) => {
            println!("FAILED");
            println!("   Error: {}", e);
            println!("   Status: disconnected");
            return Err(ServiceError::Probe(e).into());
        }
    }

    println!("\n======================================================================");
    println!("STORE PING COMPLETED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");

    // Build the store handle; only a malformed URL is fatal here
    let store = StoreHandle::new(&config)?;
    info!("Store URL: {}", store.redacted_url());

    // Priming probe so the log shows store state at startup. An
    // unreachable store is reported, not fatal.
    match store.ping().await {
        Ok(()) => info!("Store reachable"),
        Err(e) => warn!(
            "Store not reachable at startup: {}. Health endpoint will report disconnected.",
            e
        ),
    }

    // Create app state
    let app_state = AppState::new(store);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}
