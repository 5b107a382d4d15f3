// crates/km_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, tracing setup and
// the two run paths (snapshot / raw). Recoverable "no result" outcomes exit
// 0 with the fallback payload written; only broken input or I/O fails.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Malformed or domain-invalid input (bad JSON, share out of range…).
    pub const VALIDATION: i32 = 2;
    /// Filesystem failures (read/write/rename).
    pub const IO: i32 = 4;
}

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{parse_and_validate as parse_cli, Args};
use km_core::Params;
use km_io::IoError;
use km_pipeline::{run_raw_file, run_snapshot_file, write_payload, PipelineError, RunOutcome};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Io(String),
}

impl From<PipelineError> for MainError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Io(io) => match io {
                IoError::Read { .. } | IoError::Write { .. } => MainError::Io(io.to_string()),
                IoError::Json { .. } | IoError::Domain(_) | IoError::Shape(_) => {
                    MainError::Validation(io.to_string())
                }
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("km: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let (code, msg) = match &e {
                MainError::Validation(m) => (exitcodes::VALIDATION, m),
                MainError::Io(m) => (exitcodes::IO, m),
            };
            eprintln!("km: error: {msg}");
            code
        }
    };
    ExitCode::from(rc as u8)
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let params = params_from(args);

    let outcome = load_and_evaluate(args, &params)?;

    if args.survey {
        print_survey(&outcome, &params);
        return Ok(());
    }

    write_payload(&args.out, &outcome.payload, args.pretty)?;
    match &outcome.winner {
        Some(winner) => info!(
            coalition = ?winner.names(),
            out = %args.out.display(),
            "run complete"
        ),
        None => info!(out = %args.out.display(), "run complete (fallback payload)"),
    }
    Ok(())
}

fn load_and_evaluate(args: &Args, params: &Params) -> Result<RunOutcome, MainError> {
    if let Some(path) = &args.snapshot {
        return Ok(run_snapshot_file(path, params)?);
    }
    // parse_cli guarantees raw+as_of when snapshot is absent.
    let path = args.raw.as_ref().expect("validated: raw input");
    let as_of = args.as_of.expect("validated: as-of date");
    Ok(run_raw_file(path, as_of, params)?)
}

fn params_from(args: &Args) -> Params {
    let mut params = Params::default();
    if let Some(icon) = &args.icon {
        params.icon = icon.clone();
    }
    params
}

/// Emit every majority coalition as one JSON document on stdout, mirroring
/// the payload's determinism (enumeration order, winner first).
fn print_survey(outcome: &RunOutcome, params: &Params) {
    let survey = km_pipeline::majority_survey(&outcome.eligible, params);
    let coalitions: Vec<serde_json::Value> = survey
        .iter()
        .map(|c| {
            serde_json::json!({
                "parties": c.names(),
                "total": (c.total_share() * 10.0).round() / 10.0,
                "selected": outcome.winner.as_ref() == Some(c),
            })
        })
        .collect();
    let doc = serde_json::json!({ "coalitions": coalitions });
    println!("{doc}");
}
