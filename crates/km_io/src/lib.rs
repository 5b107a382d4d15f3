//! km_io — File boundary of the coalition monitor.
//!
//! Single source of truth for reading poll inputs and writing the display
//! payload. No inline implementations here: the file modules own the logic,
//! this module owns the shared error surface.
//!
//! - `snapshot` — averaged snapshot JSON (party → percentage mapping)
//! - `raw`      — raw per-institute poll series + windowed averaging
//! - `write`    — atomic JSON artifact writes (temp file + rename)

#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

use km_core::CoreError;

/// Unified error for km_io (used by snapshot/raw/write).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem read failures, with the offending path.
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem write failures (including temp-file and rename steps).
    #[error("write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization failures, with the offending path.
    #[error("json {path}: {msg}")]
    Json { path: PathBuf, msg: String },

    /// Input violated a core-domain invariant (share range, duplicates…).
    #[error("invalid input: {0}")]
    Domain(#[from] CoreError),

    /// Structurally broken raw table (row/date length mismatch, bad date).
    #[error("malformed raw table: {0}")]
    Shape(String),
}

pub type IoResult<T> = Result<T, IoError>;

pub mod raw;
pub mod snapshot;
pub mod write;
