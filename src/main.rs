//! notes-server
//!
//! Plain-text notes stored as `<name>.txt` files, exposed over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server ─▶ http::notes ─▶ store::fs ──┼──▶ <cache>/<name>.txt
//!                           │   (middleware)    (existence     (tokio::fs) │
//!     Client Response       │                    gate)                     │
//!     ◀─────────────────────┼── http::error ◀────────────────────────────  │
//!                           │                                              │
//!                           │  config (clap) · lifecycle · observability   │
//!                           └──────────────────────────────────────────────┘
//! ```

use clap::Parser;

use notes_server::config::{Cli, ServerConfig};
use notes_server::lifecycle;
use notes_server::observability::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from(Cli::parse());

    init_logging(config.observability.log_format);
    tracing::info!("notes-server v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = lifecycle::run(config).await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
