//! crates/km_io/src/snapshot.rs
//! Averaged snapshot loader.
//!
//! On-disk shape: a JSON object mapping party name → percentage, e.g.
//! `{"CDU/CSU": 30.0, "AfD": 20.8}`. JSON objects carry no reliable order,
//! so the loader makes the ordering convention explicit: the resulting
//! `PollSnapshot` is sorted descending by share (ties by name), which is
//! the order the coalition search depends on.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::info;

use km_core::{PartyResult, PollSnapshot};

use crate::{IoError, IoResult};

/// Read and validate a snapshot file. Shares must be finite and within
/// `[0, 100]`; party names must be non-empty and unique.
pub fn load_snapshot(path: &Path) -> IoResult<PollSnapshot> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mapping: BTreeMap<String, f64> =
        serde_json::from_str(&text).map_err(|e| IoError::Json {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })?;
    let snapshot = snapshot_from_mapping(mapping)?;
    info!(parties = snapshot.len(), path = %path.display(), "loaded poll snapshot");
    Ok(snapshot)
}

/// Build the canonical snapshot from an in-memory mapping (shared by the
/// snapshot loader and the raw-table averaging path).
pub fn snapshot_from_mapping(mapping: BTreeMap<String, f64>) -> IoResult<PollSnapshot> {
    let parties = mapping
        .into_iter()
        .map(|(name, share)| PartyResult::new(name, share))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PollSnapshot::from_unordered(parties)?)
}
