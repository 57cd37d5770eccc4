//! Generator configuration.
//!
//! Sources are layered: an optional YAML file, then environment variables,
//! then explicit overrides (the CLI `--strategy` flag).
//!
//! ```yaml
//! strategy: hmac-sha256
//! hmac_secret: change-me
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming the strategy.
pub const ENV_STRATEGY: &str = "PUBID_STRATEGY";
/// Environment variable holding the `hmac-sha256` secret.
pub const ENV_HMAC_SECRET: &str = "PUBID_HMAC_SECRET";
/// Environment variable holding the `uuid5` namespace.
pub const ENV_UUID_NAMESPACE: &str = "PUBID_UUID_NAMESPACE";
/// Environment variable pointing at a YAML config file.
pub const ENV_CONFIG: &str = "PUBID_CONFIG";

/// Settings used to resolve the active generator.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Strategy name; `None` selects the default strategy.
    pub strategy: Option<String>,
    /// Secret for the `hmac-sha256` strategy.
    pub hmac_secret: Option<String>,
    /// UUID namespace for the `uuid5` strategy.
    pub uuid_namespace: Option<String>,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("strategy", &self.strategy)
            .field("hmac_secret", &self.hmac_secret.as_ref().map(|_| "<redacted>"))
            .field("uuid_namespace", &self.uuid_namespace)
            .finish()
    }
}

impl GeneratorConfig {
    /// Config selecting `strategy` with no other settings.
    #[must_use]
    pub fn with_strategy(strategy: impl Into<String>) -> Self {
        Self { strategy: Some(strategy.into()), ..Self::default() }
    }

    /// Parses a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        serde_yaml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Overlays non-empty values returned by `lookup` for the `PUBID_*`
    /// variables.
    #[must_use]
    pub fn overlay_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(v) = get(ENV_STRATEGY) {
            self.strategy = Some(v);
        }
        if let Some(v) = get(ENV_HMAC_SECRET) {
            self.hmac_secret = Some(v);
        }
        if let Some(v) = get(ENV_UUID_NAMESPACE) {
            self.uuid_namespace = Some(v);
        }
        self
    }

    /// Resolves configuration for the process: `path` (or `PUBID_CONFIG`),
    /// then the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a named config file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var(ENV_CONFIG).ok().filter(|v| !v.is_empty()).map(PathBuf::from);
        let base = match path.map(Path::to_path_buf).or(from_env) {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        Ok(base.overlay_env(|key| std::env::var(key).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pubid.yaml");
        std::fs::write(&path, "strategy: uuid5\nuuid_namespace: 6ba7b810-9dad-11d1-80b4-00c04fd430c8\n")
            .unwrap();
        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.strategy.as_deref(), Some("uuid5"));
        assert!(config.hmac_secret.is_none());
    }

    #[test]
    fn rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pubid.yaml");
        std::fs::write(&path, "stratgy: sha256\n").unwrap();
        assert!(matches!(GeneratorConfig::from_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::from_file(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> =
            [(ENV_STRATEGY, "hmac-sha256"), (ENV_HMAC_SECRET, "s3cret"), (ENV_UUID_NAMESPACE, "")]
                .into_iter()
                .collect();
        let base = GeneratorConfig {
            strategy: Some("sha256".into()),
            uuid_namespace: Some("keep".into()),
            ..GeneratorConfig::default()
        };
        let config = base.overlay_env(|k| env.get(k).map(|v| (*v).to_string()));
        assert_eq!(config.strategy.as_deref(), Some("hmac-sha256"));
        assert_eq!(config.hmac_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.uuid_namespace.as_deref(), Some("keep"));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = GeneratorConfig { hmac_secret: Some("s3cret".into()), ..GeneratorConfig::default() };
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("s3cret"));
        assert!(dbg.contains("<redacted>"));
    }
}
