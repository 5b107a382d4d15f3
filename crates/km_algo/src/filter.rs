//! crates/km_algo/src/filter.rs
//! Eligibility filter: the 5% hurdle, order-preserving, no side effects.

use km_core::{Params, PartyResult};

/// Keep the parties whose share meets the inclusion threshold, preserving
/// the input order. An empty result is a valid outcome ("no eligible
/// coalition") and must be handled by the caller, not treated as an error.
pub fn eligible_parties(parties: &[PartyResult], params: &Params) -> Vec<PartyResult> {
    parties
        .iter()
        .filter(|p| p.share() >= params.include_threshold_pct)
        .cloned()
        .collect()
}
