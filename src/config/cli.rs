//! Command-line parsing for the server binary.
//!
//! `--host`, `--port` and `--cache` are mandatory; clap reports a missing
//! flag on stderr and exits before anything else starts.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::{
    FormConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ServerConfig, StorageConfig,
};
use crate::observability::logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "notes-server")]
#[command(about = "Serve plain-text notes stored as files over HTTP", long_about = None)]
pub struct Cli {
    /// Address to bind.
    #[arg(long)]
    pub host: String,

    /// Port to bind.
    #[arg(long)]
    pub port: u16,

    /// Directory holding the note files. Must already exist; startup
    /// aborts otherwise.
    #[arg(long)]
    pub cache: PathBuf,

    /// HTML upload form served at `/`.
    #[arg(long, default_value = "public/index.html")]
    pub form: PathBuf,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    #[arg(long, default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Expose Prometheus metrics on this address.
    #[arg(long)]
    pub metrics_address: Option<SocketAddr>,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            listener: ListenerConfig {
                host: cli.host,
                port: cli.port,
            },
            storage: StorageConfig {
                cache_dir: cli.cache,
            },
            form: FormConfig { path: cli.form },
            limits: LimitsConfig {
                request_timeout_secs: cli.request_timeout_secs,
                max_body_bytes: cli.max_body_bytes,
            },
            observability: ObservabilityConfig {
                log_format: cli.log_format,
                metrics_address: cli.metrics_address,
            },
        }
    }
}
