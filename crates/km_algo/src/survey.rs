//! crates/km_algo/src/survey.rs
//! Exhaustive diagnostic listing of every majority coalition. Selection
//! never uses this; it exists so an operator can see which alternatives the
//! first-match rule skipped.

use km_core::{Coalition, Params, PartyResult};

use crate::enumerate::coalitions;
use crate::majority::has_majority;

/// All coalitions reaching the majority threshold, in enumeration order.
/// The selected winner (if any) is always the first element.
pub fn majority_survey(eligible: &[PartyResult], params: &Params) -> Vec<Coalition> {
    coalitions(eligible)
        .filter(|c| has_majority(c, params))
        .collect()
}
