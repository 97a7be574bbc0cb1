//! serve-gate
//!
//! Serves an explicit list of files from one directory, plus a generated
//! index page, to an allow-listed set of caller addresses.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum (ConnectInfo) ──▶ access control ──▶ request router
//!                                               │                 │
//!                                               ▼                 ├─▶ index page
//!                                         403 Not allowed!        ├─▶ file stream
//!                                                                 └─▶ 403 / 404
//! ```

use clap::Parser;

use serve_gate::cli::Cli;
use serve_gate::http::HttpServer;
use serve_gate::lifecycle::{self, signals, Shutdown};
use serve_gate::net;
use serve_gate::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.into_config()?;

    logging::init(&config.observability.log_level);
    tracing::info!("serve-gate v{} starting", env!("CARGO_PKG_VERSION"));

    // Everything fatal happens before the socket is bound
    let context = match lifecycle::prepare(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let listener = net::bind(&context.config.listener).await?;

    let shutdown = Shutdown::new();
    tokio::spawn(signals::forward_signals(shutdown.clone()));

    let server = HttpServer::new(context);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
