//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the note store produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows into the per-request trace span
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
