//! Deterministic public identifiers derived from attribute mappings.
//!
//! An identity service builds one [`context::ServiceContext`] at startup,
//! which resolves the configured strategy, and hands
//! [`ServiceContext::get_active_generator`](context::ServiceContext::get_active_generator)
//! to whatever needs IDs:
//!
//! ```
//! use pubid::config::GeneratorConfig;
//! use pubid::context::ServiceContext;
//! use pubid::mapping::Mapping;
//!
//! let ctx = ServiceContext::from_config(&GeneratorConfig::default()).unwrap();
//! let mapping: Mapping = [("name", "alice"), ("domain", "default")].into_iter().collect();
//! let id = ctx.get_active_generator().generate_public_id(&mapping).unwrap();
//! assert_eq!(id.as_str().len(), 64);
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod mapping;
pub mod ports;
pub mod public_id;
pub mod strategy;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
