//! Registry of the concrete ID generation strategies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use crate::adapters::live::{
    HmacSha256IdGenerator, Sha256IdGenerator, Sha256ValuesIdGenerator, Uuid5IdGenerator,
};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::ports::IdGenerator;

/// A named, selectable generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// SHA-256 of the canonical mapping.
    #[default]
    Sha256,
    /// SHA-256 of the values only, Keystone compatible. Distinct mappings
    /// may share an ID.
    Sha256Values,
    /// HMAC-SHA256 of the canonical mapping under a secret.
    HmacSha256,
    /// UUIDv5 of the canonical mapping under a namespace.
    Uuid5,
}

impl Strategy {
    /// Every registered strategy.
    pub const ALL: [Strategy; 4] =
        [Strategy::Sha256, Strategy::Sha256Values, Strategy::HmacSha256, Strategy::Uuid5];

    /// Configuration identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sha256 => "sha256",
            Strategy::Sha256Values => "sha256-values",
            Strategy::HmacSha256 => HmacSha256IdGenerator::NAME,
            Strategy::Uuid5 => "uuid5",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Strategy::Sha256 => "SHA-256 of the canonical mapping, 64 hex chars",
            Strategy::Sha256Values => {
                "SHA-256 of the values in key order, 64 hex chars; \
                 Keystone compatibility only, keys are ignored so distinct mappings can collide"
            }
            Strategy::HmacSha256 => "HMAC-SHA256 keyed by hmac_secret, 64 hex chars",
            Strategy::Uuid5 => "UUIDv5 under uuid_namespace, 32 hex chars",
        }
    }

    /// Resolves the strategy named in `config`, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStrategy`] for an unregistered name.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.strategy.as_deref().map_or(Ok(Self::default()), str::parse)
    }

    /// Constructs the generator for this strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if a setting the strategy needs is missing or
    /// malformed.
    pub fn build(self, config: &GeneratorConfig) -> Result<Arc<dyn IdGenerator>, ConfigError> {
        Ok(match self {
            Strategy::Sha256 => Arc::new(Sha256IdGenerator::new()),
            Strategy::Sha256Values => Arc::new(Sha256ValuesIdGenerator),
            Strategy::HmacSha256 => {
                let secret = config
                    .hmac_secret
                    .as_deref()
                    .ok_or(ConfigError::MissingSecret(HmacSha256IdGenerator::NAME))?;
                Arc::new(HmacSha256IdGenerator::new(secret.as_bytes())?)
            }
            Strategy::Uuid5 => {
                let namespace = match config.uuid_namespace.as_deref() {
                    Some(value) => Uuid::parse_str(value).map_err(|source| {
                        ConfigError::InvalidNamespace { value: value.to_string(), source }
                    })?,
                    None => Uuid5IdGenerator::DEFAULT_NAMESPACE,
                };
                Arc::new(Uuid5IdGenerator::new(namespace))
            }
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL.into_iter().find(|strategy| strategy.name() == wanted).ok_or_else(|| {
            ConfigError::UnknownStrategy {
                name: s.to_string(),
                known: Self::ALL.map(Strategy::name).join(", "),
            }
        })
    }
}
