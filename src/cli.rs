//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `pubid`.
#[derive(Debug, Parser)]
#[command(name = "pubid", version, about = "Derive deterministic public IDs from attribute mappings")]
pub struct Cli {
    /// YAML configuration file (defaults to `PUBID_CONFIG`).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Strategy to activate, overriding configuration.
    #[arg(long, global = true, value_name = "NAME")]
    pub strategy: Option<String>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the public ID for a mapping.
    Generate {
        /// Attributes as KEY=VALUE pairs; values are strings.
        #[arg(value_name = "KEY=VALUE")]
        attributes: Vec<String>,
        /// Attributes as a JSON object, merged with the pairs.
        #[arg(long, value_name = "JSON")]
        json: Option<String>,
    },
    /// List the registered strategies.
    Strategies,
    /// Check that a recorded cassette still reproduces.
    Verify {
        /// Cassette file written by a `PUBID_RECORD` session.
        cassette: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_pairs() {
        let cli = Cli::parse_from(["pubid", "generate", "name=alice", "domain=default"]);
        match cli.command {
            Command::Generate { attributes, json } => {
                assert_eq!(attributes, vec!["name=alice", "domain=default"]);
                assert!(json.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_strategy_after_subcommand() {
        let cli = Cli::parse_from(["pubid", "generate", "--strategy", "uuid5", "a=b"]);
        assert_eq!(cli.strategy.as_deref(), Some("uuid5"));
    }

    #[test]
    fn parses_verify_subcommand() {
        let cli = Cli::parse_from(["pubid", "verify", "ids.cassette.yaml"]);
        assert!(matches!(cli.command, Command::Verify { .. }));
    }

    #[test]
    fn parses_strategies_subcommand() {
        let cli = Cli::parse_from(["pubid", "strategies"]);
        assert!(matches!(cli.command, Command::Strategies));
    }
}
