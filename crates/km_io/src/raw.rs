//! crates/km_io/src/raw.rs
//! Raw poll series: per-institute dated readings per party, averaged over a
//! trailing window into an evaluation snapshot.
//!
//! On-disk shape:
//! ```json
//! {
//!   "dates": ["20.08.2026", "24.08.2026"],
//!   "parties": { "CDU/CSU": [29.5, 30.5], "FDP": [null, 4.0] }
//! }
//! ```
//! Dates use the publisher's `DD.MM.YYYY` format. A `null` reading means
//! the institute did not report that party; zeros are treated the same way
//! (the publisher prints dashes for both).
//!
//! The reference cutoff (`as_of`) is always passed in by the caller; this
//! module never reads the clock, so averaging a fixed file is reproducible.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{Days, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use km_core::PollSnapshot;

use crate::snapshot::snapshot_from_mapping;
use crate::{IoError, IoResult};

/// Trailing window used when averaging raw readings.
pub const DEFAULT_WINDOW_DAYS: u64 = 14;

/// Raw poll table as published: one column per institute date, one row per
/// party. Row lengths must match `dates`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPollTable {
    pub dates: Vec<String>,
    pub parties: BTreeMap<String, Vec<Option<f64>>>,
}

pub fn load_raw_table(path: &Path) -> IoResult<RawPollTable> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| IoError::Json {
        path: path.to_path_buf(),
        msg: e.to_string(),
    })
}

/// Average the readings within the trailing `window_days` ending at `as_of`
/// and build the canonical snapshot. Parties with no usable reading in the
/// window average to 0.0 and fall to the eligibility filter downstream.
pub fn average_snapshot(
    table: &RawPollTable,
    as_of: NaiveDate,
    window_days: u64,
) -> IoResult<PollSnapshot> {
    let dates = parse_dates(&table.dates)?;
    let cutoff = as_of
        .checked_sub_days(Days::new(window_days))
        .ok_or_else(|| IoError::Shape("window underflows the calendar".to_string()))?;

    let mut averaged: BTreeMap<String, f64> = BTreeMap::new();
    for (party, readings) in &table.parties {
        if readings.len() != dates.len() {
            return Err(IoError::Shape(format!(
                "party {party}: {} readings for {} dates",
                readings.len(),
                dates.len()
            )));
        }
        let usable: Vec<f64> = readings
            .iter()
            .zip(&dates)
            .filter(|(_, &date)| date >= cutoff && date <= as_of)
            .filter_map(|(reading, _)| *reading)
            .filter(|&v| v > 0.0)
            .collect();
        let share = if usable.is_empty() {
            warn!(party = %party, "no usable readings in window; treating as 0");
            0.0
        } else {
            round1(usable.iter().sum::<f64>() / usable.len() as f64)
        };
        averaged.insert(party.clone(), share);
    }
    snapshot_from_mapping(averaged)
}

fn parse_dates(raw: &[String]) -> IoResult<Vec<NaiveDate>> {
    raw.iter()
        .map(|s| {
            NaiveDate::parse_from_str(s, "%d.%m.%Y")
                .map_err(|e| IoError::Shape(format!("bad date {s:?}: {e}")))
        })
        .collect()
}

/// Round half away from zero to one decimal, matching the published figures.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use km_core::PartyResult;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%d.%m.%Y").expect("date")
    }

    fn table(dates: &[&str], parties: &[(&str, &[Option<f64>])]) -> RawPollTable {
        RawPollTable {
            dates: dates.iter().map(|s| s.to_string()).collect(),
            parties: parties
                .iter()
                .map(|&(name, row)| (name.to_string(), row.to_vec()))
                .collect(),
        }
    }

    #[test]
    fn averages_within_window_and_rounds() {
        let t = table(
            &["10.08.2026", "20.08.2026", "24.08.2026"],
            &[("CDU/CSU", &[Some(40.0), Some(29.0), Some(30.5)])],
        );
        // 10.08. is outside the 14-day window ending 28.08.
        let snap = average_snapshot(&t, date("28.08.2026"), DEFAULT_WINDOW_DAYS).expect("snapshot");
        let cdu = &snap.parties()[0];
        assert_eq!(cdu.name(), "CDU/CSU");
        assert_eq!(cdu.share(), 29.8); // (29.0 + 30.5) / 2 = 29.75 → 29.8
    }

    #[test]
    fn zeros_and_nulls_are_missing_readings() {
        let t = table(
            &["20.08.2026", "24.08.2026"],
            &[("FDP", &[None, Some(4.0)]), ("BSW", &[Some(0.0), Some(0.0)])],
        );
        let snap = average_snapshot(&t, date("28.08.2026"), DEFAULT_WINDOW_DAYS).expect("snapshot");
        let shares: Vec<(&str, f64)> = snap
            .parties()
            .iter()
            .map(|p| (p.name(), p.share()))
            .collect();
        assert_eq!(shares, vec![("FDP", 4.0), ("BSW", 0.0)]);
    }

    #[test]
    fn future_columns_are_excluded() {
        let t = table(
            &["20.08.2026", "05.09.2026"],
            &[("SPD", &[Some(15.0), Some(25.0)])],
        );
        let snap = average_snapshot(&t, date("28.08.2026"), DEFAULT_WINDOW_DAYS).expect("snapshot");
        assert_eq!(snap.parties()[0].share(), 15.0);
    }

    #[test]
    fn row_length_mismatch_is_rejected() {
        let t = table(&["20.08.2026"], &[("SPD", &[Some(15.0), Some(16.0)])]);
        let err = average_snapshot(&t, date("28.08.2026"), DEFAULT_WINDOW_DAYS).unwrap_err();
        assert!(matches!(err, IoError::Shape(_)), "{err}");
    }

    #[test]
    fn bad_date_is_rejected() {
        let t = table(&["2026-08-20"], &[("SPD", &[Some(15.0)])]);
        let err = average_snapshot(&t, date("28.08.2026"), DEFAULT_WINDOW_DAYS).unwrap_err();
        assert!(matches!(err, IoError::Shape(_)), "{err}");
    }

    #[test]
    fn result_is_in_descending_share_order() {
        let t = table(
            &["24.08.2026"],
            &[("SPD", &[Some(15.0)]), ("CDU/CSU", &[Some(30.0)])],
        );
        let snap = average_snapshot(&t, date("28.08.2026"), DEFAULT_WINDOW_DAYS).expect("snapshot");
        let names: Vec<&str> = snap.parties().iter().map(PartyResult::name).collect();
        assert_eq!(names, vec!["CDU/CSU", "SPD"]);
    }
}
