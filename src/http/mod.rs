//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, trace span, metrics)
//!     → body.rs (urlencoded / multipart / JSON decoding)
//!     → notes.rs (existence gate, NoteStore call)
//!     → error.rs (status code + plain-text message)
//!     → Send to client
//! ```

pub mod body;
pub mod docs;
pub mod error;
pub mod form;
pub mod notes;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
