//! crates/km_algo/src/majority.rs
//! Majority evaluation: a stateless predicate over the candidate stream,
//! early-terminated at the first hit.

use km_core::{Coalition, Params, PartyResult};

use crate::enumerate::coalitions;

/// True iff the coalition's cumulative share reaches the majority threshold.
/// The threshold is inclusive: exactly 50.0 passes.
pub fn has_majority(coalition: &Coalition, params: &Params) -> bool {
    coalition.total_share() >= params.majority_threshold_pct
}

/// Return the first coalition (in enumeration order) whose total share
/// reaches the majority threshold, or `None` when no subset of `eligible`
/// does. `None` is the explicit "no majority found" outcome; it is never
/// an error and never a partial coalition.
///
/// `eligible` must be filtered (every share ≥ inclusion threshold) and in
/// descending-share order; see `filter::eligible_parties` and
/// `PollSnapshot`.
pub fn find_majority_coalition(eligible: &[PartyResult], params: &Params) -> Option<Coalition> {
    coalitions(eligible).find(|c| has_majority(c, params))
}
