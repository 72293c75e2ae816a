//! Contact directory service entry point.
//!
//! ```text
//!     HTTP request
//!         → http::server (Axum router + middleware)
//!         → directory (validate / normalize / store)
//!         → http::response (status + JSON body)
//! ```
//!
//! Usage: `contact-directory [config.toml]`. Without an argument the
//! defaults apply (bind 0.0.0.0:8000, metrics off).

use std::path::Path;

use tokio::net::TcpListener;

use contact_directory::config::{load_config, ServiceConfig};
use contact_directory::lifecycle::Shutdown;
use contact_directory::observability::{logging, metrics};
use contact_directory::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "contact-directory starting");

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // A default config never went through validation, so the address
        // may still fail to parse here.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
        }
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
