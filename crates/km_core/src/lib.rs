//! km_core — Core types and parameters for the coalition monitor.
//!
//! This crate is **I/O-free**. It defines the stable domain types used across
//! the engine (`km_io`, `km_algo`, `km_pipeline`, `km_display`, `km_cli`):
//!
//! - Poll entities: `PartyResult`, `PollSnapshot`, `Coalition`
//! - Tunables: `Params` (inclusion threshold, majority threshold, frame budget)
//! - Deterministic ordering helpers (descending-share convention)
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod entities;
pub mod variables;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation.
    #[derive(Clone, Debug, PartialEq)]
    pub enum CoreError {
        /// Party names identify parties; empty names are never valid.
        EmptyPartyName,
        /// Shares are percentages; NaN/inf cannot enter the domain.
        NonFiniteShare,
        /// Share outside [0, 100].
        ShareOutOfRange(f64),
        /// The same party appeared twice in one snapshot.
        DuplicateParty(String),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::EmptyPartyName => write!(f, "empty party name"),
                CoreError::NonFiniteShare => write!(f, "non-finite share"),
                CoreError::ShareOutOfRange(s) => write!(f, "share out of range [0,100]: {s}"),
                CoreError::DuplicateParty(name) => write!(f, "duplicate party: {name}"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub use entities::{Coalition, PartyResult, PollSnapshot};
pub use errors::CoreError;
pub use variables::Params;
