//! Command dispatch and handlers.

pub mod generate;
pub mod strategies;
pub mod verify;

use std::env;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::strategy::Strategy;

/// Environment variable naming a cassette file to record derivations into.
pub const ENV_RECORD: &str = "PUBID_RECORD";

/// Dispatch a parsed command to its handler.
///
/// When `PUBID_RECORD` is set to a file path, every derivation made by
/// `generate` is recorded to a cassette at that path.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Strategies => {
            let config = resolve_config(cli)?;
            let active = Strategy::from_config(&config).map_err(|e| e.to_string())?;
            strategies::run(active)
        }
        Command::Generate { attributes, json } => {
            let config = resolve_config(cli)?;
            let ctx = match env::var(ENV_RECORD).ok().filter(|p| !p.is_empty()) {
                Some(path) => ServiceContext::recording(&config, &PathBuf::from(path)),
                None => ServiceContext::from_config(&config),
            }
            .map_err(|e| e.to_string())?;

            let result = generate::run(&ctx, attributes, json.as_deref());

            // Write the cassette even when generation failed
            finish_recording(ctx)?;
            result
        }
        Command::Verify { cassette } => {
            let config = resolve_config(cli)?;
            verify::run(config, cli.strategy.as_deref(), cassette)
        }
    }
}

/// Layer the config file, the environment and `--strategy`.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, String> {
    let mut config = GeneratorConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(strategy) = &cli.strategy {
        config.strategy = Some(strategy.clone());
    }
    Ok(config)
}

fn finish_recording(ctx: ServiceContext) -> Result<(), String> {
    if let Some(path) = ctx.finish()? {
        eprintln!("Recording saved to: {}", path.display());
    }
    Ok(())
}
