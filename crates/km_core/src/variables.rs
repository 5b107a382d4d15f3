//! crates/km_core/src/variables.rs
//! Run parameters. Defaults mirror the published reference behavior:
//! 5% inclusion hurdle, 50% majority, 7-character display frames.

/// 5% electoral hurdle: parties below it are excluded from the search.
pub const DEFAULT_INCLUDE_THRESHOLD_PCT: f64 = 5.0;

/// Cumulative share a coalition needs to govern (inclusive).
pub const DEFAULT_MAJORITY_THRESHOLD_PCT: f64 = 50.0;

/// Character budget of one display frame on the target device.
pub const DEFAULT_FRAME_WIDTH: usize = 7;

/// Glyph resource shown next to every frame on the display.
pub const DEFAULT_ICON: &str = "13092";

/// Tunables for one evaluation run. Constructed once by the caller and
/// passed read-only through the pipeline; the library never reads ambient
/// configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Minimum share (percent) for a party to enter the coalition search.
    pub include_threshold_pct: f64,
    /// Minimum cumulative share (percent) for a coalition to be accepted.
    pub majority_threshold_pct: f64,
    /// Maximum characters per display frame (counted in Unicode scalars).
    pub frame_width: usize,
    /// Icon identifier stamped on every emitted frame.
    pub icon: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            include_threshold_pct: DEFAULT_INCLUDE_THRESHOLD_PCT,
            majority_threshold_pct: DEFAULT_MAJORITY_THRESHOLD_PCT,
            frame_width: DEFAULT_FRAME_WIDTH,
            icon: DEFAULT_ICON.to_string(),
        }
    }
}
