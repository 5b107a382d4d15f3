//! km_algo — Coalition search primitives.
//!
//! Pure, deterministic, I/O-free. Three stages, composed by `km_pipeline`:
//!
//! 1. [`filter::eligible_parties`] drops parties below the inclusion hurdle.
//! 2. [`enumerate::coalitions`] lazily yields every non-empty subset of the
//!    eligible parties in a fixed, minimal-size-first order.
//! 3. [`majority::find_majority_coalition`] stops at the first subset whose
//!    cumulative share reaches the majority threshold.
//!
//! The enumerator assumes its input is ordered descending by share (the
//! `PollSnapshot` convention); that order is what makes "first match" mean
//! "fewest partners, strongest parties first".

#![forbid(unsafe_code)]

pub mod enumerate;
pub mod filter;
pub mod majority;
pub mod survey;

pub use enumerate::{coalitions, CoalitionIter};
pub use filter::eligible_parties;
pub use majority::find_majority_coalition;
pub use survey::majority_survey;
