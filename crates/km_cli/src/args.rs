//! crates/km_cli/src/args.rs
//! Deterministic, offline CLI argument surface.
//!
//! Rules:
//! - Exactly one input: --snapshot XOR --raw.
//! - --raw requires --as-of (the library never reads the clock, so the
//!   averaging cutoff is always explicit on the command line).
//! - No networked paths: anything that looks like a URL scheme is rejected.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "km",
    disable_help_subcommand = true,
    about = "Offline, deterministic coalition monitor for poll snapshots"
)]
pub struct Args {
    // --- Input selection ---
    /// Averaged snapshot JSON (object mapping party name to percentage).
    #[arg(long, conflicts_with_all = ["raw", "as_of"])]
    pub snapshot: Option<PathBuf>,

    /// Raw poll-series JSON (per-institute dated readings per party).
    #[arg(long, requires = "as_of")]
    pub raw: Option<PathBuf>,

    /// Averaging cutoff for --raw, as YYYY-MM-DD (trailing 14-day window).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    // --- Output ---
    /// Output path for the display payload.
    #[arg(long, default_value = "data.json")]
    pub out: PathBuf,

    /// Pretty-print the payload JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Icon identifier stamped on every frame.
    #[arg(long)]
    pub icon: Option<String>,

    // --- Diagnostics ---
    /// Print every majority coalition (enumeration order) to stdout instead
    /// of writing the payload.
    #[arg(long)]
    pub survey: bool,
}

/// Parse argv and apply the checks clap cannot express.
pub fn parse_and_validate() -> Result<Args, String> {
    let args = Args::parse();
    validate(&args)?;
    Ok(args)
}

fn validate(args: &Args) -> Result<(), String> {
    match (&args.snapshot, &args.raw) {
        (None, None) => return Err("one of --snapshot or --raw is required".to_string()),
        (Some(_), Some(_)) => unreachable!("clap conflicts_with enforces exclusivity"),
        _ => {}
    }
    for path in [&args.snapshot, &args.raw].into_iter().flatten() {
        reject_url_like(path)?;
    }
    reject_url_like(&args.out)?;
    Ok(())
}

/// This tool is offline by design; a path that smells like a URL is a
/// misconfiguration, not an input.
fn reject_url_like(path: &Path) -> Result<(), String> {
    let s = path.to_string_lossy();
    if s.contains("://") {
        return Err(format!("networked paths are not supported: {s}"));
    }
    Ok(())
}
