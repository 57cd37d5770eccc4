//! Error types for ID generation and generator configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while deriving a public ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdGenError {
    /// No concrete strategy is bound behind the generator port.
    #[error("ID generation is not implemented: {0}")]
    NotImplemented(String),

    /// A strategy produced a value outside the public ID bounds.
    #[error("invalid public ID {value:?}: {reason}")]
    InvalidPublicId {
        /// The rejected value.
        value: String,
        /// Which bound was violated.
        reason: &'static str,
    },
}

/// Errors raised while resolving the active generator from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured strategy name is not registered.
    #[error("unknown ID generation strategy '{name}' (known strategies: {known})")]
    UnknownStrategy {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated list of registered names.
        known: String,
    },

    /// A keyed strategy was selected without a secret.
    #[error("strategy '{0}' requires a secret; set PUBID_HMAC_SECRET or hmac_secret")]
    MissingSecret(&'static str),

    /// The configured UUID namespace does not parse.
    #[error("invalid UUID namespace '{value}': {source}")]
    InvalidNamespace {
        /// The configured value.
        value: String,
        /// Parser error.
        #[source]
        source: uuid::Error,
    },

    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for `GeneratorConfig`.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}
