//! Binary entrypoint for the `pubid` CLI.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const ENV_LOG: &str = "PUBID_LOG";

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Recording is handled in commands::dispatch via PUBID_RECORD=<path>.
    match pubid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
