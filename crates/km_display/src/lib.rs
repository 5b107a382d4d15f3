//! km_display — Display payload model and formatting.
//!
//! Turns a winning coalition (or its absence) into the fixed-schema frame
//! sequence the downstream display device consumes. No I/O, no recomputation
//! of search results; deterministic ordering only.

#![forbid(unsafe_code)]

pub mod frames;
pub mod labels;

pub use frames::{build_payload, fallback_payload, DisplayFrame, DisplayPayload};
pub use labels::normalize_label;
