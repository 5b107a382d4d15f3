//! km_pipeline — deterministic evaluation surface
//! (load → filter → enumerate/evaluate → normalize/format → write).
//!
//! The pipeline itself is I/O-free apart from the explicit load/write entry
//! points, which delegate to `km_io`. Running the same input twice yields
//! byte-identical payloads: there is no clock, no RNG and no ambient state
//! anywhere on this path.

#![forbid(unsafe_code)]

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use km_algo::{eligible_parties, find_majority_coalition};

// Diagnostics surface for callers that already hold an eligible set.
pub use km_algo::majority_survey;
use km_core::{Coalition, Params, PartyResult, PollSnapshot};
use km_display::{build_payload, fallback_payload, DisplayPayload};
use km_io::IoError;

/// Single error surface for pipeline orchestration. Recoverable outcomes
/// (no eligible parties, no majority) are **not** errors; they surface as
/// the fallback payload inside a successful [`RunOutcome`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Everything one evaluation run produced. `payload` is always present and
/// well-formed; `winner` is `None` on the fallback path.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    /// Eligible parties, descending by share (post-filter input to the search).
    pub eligible: Vec<PartyResult>,
    /// The selected coalition, if any subset reached the majority.
    pub winner: Option<Coalition>,
    /// Display artifact: winner frames or the deterministic fallback.
    pub payload: DisplayPayload,
}

/// Pure core run: filter → search → format. Never fails; the two
/// "no result" outcomes both map onto the fallback payload.
pub fn evaluate_snapshot(snapshot: &PollSnapshot, params: &Params) -> RunOutcome {
    let eligible = eligible_parties(snapshot.parties(), params);
    if eligible.is_empty() {
        warn!("no party clears the inclusion threshold");
        return RunOutcome {
            eligible,
            winner: None,
            payload: fallback_payload(params),
        };
    }
    info!(
        eligible = ?eligible.iter().map(PartyResult::name).collect::<Vec<_>>(),
        "eligible parties"
    );

    match find_majority_coalition(&eligible, params) {
        Some(winner) => {
            info!(
                coalition = ?winner.names(),
                total_share = winner.total_share(),
                "majority coalition selected"
            );
            let payload = build_payload(&winner, params);
            RunOutcome {
                eligible,
                winner: Some(winner),
                payload,
            }
        }
        None => {
            warn!("no coalition reaches the majority threshold");
            RunOutcome {
                eligible,
                winner: None,
                payload: fallback_payload(params),
            }
        }
    }
}

/// Load an averaged snapshot file and evaluate it.
pub fn run_snapshot_file(path: &Path, params: &Params) -> Result<RunOutcome, PipelineError> {
    let snapshot = km_io::snapshot::load_snapshot(path)?;
    Ok(evaluate_snapshot(&snapshot, params))
}

/// Load a raw poll-series file, average it over the trailing window ending
/// at `as_of`, and evaluate the resulting snapshot.
pub fn run_raw_file(
    path: &Path,
    as_of: NaiveDate,
    params: &Params,
) -> Result<RunOutcome, PipelineError> {
    let table = km_io::raw::load_raw_table(path)?;
    let snapshot = km_io::raw::average_snapshot(&table, as_of, km_io::raw::DEFAULT_WINDOW_DAYS)?;
    Ok(evaluate_snapshot(&snapshot, params))
}

/// Atomically write the payload artifact for the display collaborator.
pub fn write_payload(path: &Path, payload: &DisplayPayload, pretty: bool) -> Result<(), PipelineError> {
    km_io::write::write_json_atomic(path, payload, pretty)?;
    info!(path = %path.display(), frames = payload.frames.len(), "payload written");
    Ok(())
}
