//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line
//!     → cli.rs (clap parse, required flags)
//!     → schema.rs (ServerConfig)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - No config file and no environment fallback
//! - Config is immutable once the server starts

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{ListenerConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
