//! Note storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → fs.rs (name → <cache>/<name>.txt, tokio::fs primitive)
//!     → StoreError on failure (logged + counted)
//!     → collapsed to Option / unit at the NoteStore boundary
//! ```
//!
//! # Design Decisions
//! - The files on disk are the only state; nothing is cached in memory
//! - Note names are joined verbatim, with no escaping or normalization
//! - No locking: existence checks and mutations are separate calls

pub mod fs;
pub mod note;

pub use fs::{NoteStore, StoreError, NOTE_EXTENSION};
pub use note::Note;
