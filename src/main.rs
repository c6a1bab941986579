//! space-router
//!
//! Serves the space console's route table over HTTP.
//!
//! ```text
//!     GET /            ──▶ 302 Location: /space/list
//!     GET /space/list  ──▶ 200 {"view": "SpaceList", ...}
//!     GET /space/add   ──▶ 200 {"view": "SpaceAdd", ...}
//!     GET /elsewhere   ──▶ 404
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use space_router::lifecycle::{signals, startup, Shutdown};
use space_router::observability::{logging, metrics};
use space_router::HttpServer;

#[derive(Parser)]
#[command(name = "space-router", version)]
#[command(about = "Route table server for the space console", long_about = None)]
struct Args {
    /// TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = startup::load(args.config.as_deref())?;
    logging::init_logging(&config.observability.log_level);
    let table = startup::compile(&config)?;

    tracing::info!("space-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base = %config.history.base,
        routes = table.routes().len(),
        admin = config.admin.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(&config, table);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
