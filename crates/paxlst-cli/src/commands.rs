use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use paxlst_cli::batch::{BatchOutcome, FailureMode, clean_dir};
use paxlst_core::{clean, normalize, validate};
use paxlst_ingest::{read_payload, write_payload};
use paxlst_model::ValidationReport;

use crate::cli::{BatchArgs, CheckArgs, CleanArgs};

/// Clean a single message file to stdout or to `--output`.
pub fn run_clean(args: &CleanArgs) -> Result<()> {
    let payload = read_payload(&args.file).context("read message")?;
    let cleaned = clean(&payload)?;
    match &args.output {
        Some(path) => {
            write_payload(path, &cleaned).context("write cleaned message")?;
            info!(
                source = %args.file.display(),
                target = %path.display(),
                segments = cleaned.lines().count(),
                "cleaned"
            );
        }
        None => print!("{cleaned}"),
    }
    Ok(())
}

/// Validate a single message file without producing output.
///
/// Returns whether the message carries every mandatory segment.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let payload = read_payload(&args.file).context("read message")?;
    let report = validate(&normalize(&payload));
    if report.is_valid() {
        info!(file = %args.file.display(), "valid PAXLST message");
        println!("{}: valid PAXLST message", args.file.display());
    } else {
        warn!(
            file = %args.file.display(),
            missing = report.missing_count(),
            "mandatory segments missing"
        );
        println!(
            "{}: missing segments: {}",
            args.file.display(),
            report.describe()
        );
    }
    if let Some(path) = &args.report {
        write_check_report(path, &report)?;
    }
    Ok(report.is_valid())
}

/// Clean a whole directory, honoring the fail-fast default.
pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let mode = if args.keep_going {
        FailureMode::Continue
    } else {
        FailureMode::Halt
    };
    let outcome = clean_dir(&args.source_dir, &args.target_dir, mode)?;
    if let Some(path) = &args.report {
        write_batch_report(path, &outcome)?;
    }
    Ok(outcome)
}

fn write_check_report(path: &Path, report: &ValidationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize validation report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn write_batch_report(path: &Path, outcome: &BatchOutcome) -> Result<()> {
    let report = serde_json::json!({
        "cleaned": outcome
            .cleaned
            .iter()
            .map(|file| {
                serde_json::json!({
                    "source": file.source.display().to_string(),
                    "target": file.target.display().to_string(),
                    "segments": file.segments,
                })
            })
            .collect::<Vec<_>>(),
        "failures": outcome
            .failures
            .iter()
            .map(|failure| {
                serde_json::json!({
                    "source": failure.source.display().to_string(),
                    "error": failure.error.to_string(),
                })
            })
            .collect::<Vec<_>>(),
        "halted": outcome.halted,
    });
    let json = serde_json::to_string_pretty(&report).context("serialize batch report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
