//! `pubid verify` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::cassette::format::Cassette;
use crate::cassette::replayer::{CassetteReplayer, VerificationReport};
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;

/// Replays `cassette` with the strategy it was recorded with, unless
/// `strategy_override` names another one.
///
/// # Errors
///
/// Returns an error string if the cassette cannot be loaded or the
/// generator cannot be built.
pub fn verify_cassette(
    mut config: GeneratorConfig,
    strategy_override: Option<&str>,
    cassette: &Path,
) -> Result<VerificationReport, String> {
    let cassette = Cassette::load(cassette)?;
    let replayer = CassetteReplayer::new(&cassette);
    config.strategy = Some(strategy_override.unwrap_or(replayer.strategy()).to_string());

    let ctx = ServiceContext::from_config(&config).map_err(|e| e.to_string())?;
    Ok(replayer.verify(ctx.get_active_generator().as_ref()))
}

/// Human-readable summary of a report.
#[must_use]
pub fn render(report: &VerificationReport) -> String {
    let mut out = String::new();
    for mismatch in &report.mismatches {
        let actual = match &mismatch.actual {
            Ok(id) => id.to_string(),
            Err(e) => format!("error: {e}"),
        };
        let _ = writeln!(
            out,
            "MISMATCH seq={}: expected {}, got {actual}",
            mismatch.seq, mismatch.expected
        );
    }
    let _ = write!(
        out,
        "{} checked, {} mismatched",
        report.checked,
        report.mismatches.len()
    );
    out
}

/// Execute the `verify` command.
///
/// # Errors
///
/// Returns an error string if verification could not run or any recorded
/// ID failed to reproduce.
pub fn run(
    config: GeneratorConfig,
    strategy_override: Option<&str>,
    cassette: &Path,
) -> Result<(), String> {
    let report = verify_cassette(config, strategy_override, cassette)?;
    println!("{}", render(&report));
    if report.passed() {
        Ok(())
    } else {
        Err(format!("{} recorded ID(s) no longer reproduce", report.mismatches.len()))
    }
}
