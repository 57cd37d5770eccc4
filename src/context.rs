//! Service context holding the active ID generator.
//!
//! A context is built once at startup and handed to every consumer. All
//! configuration problems surface from the constructors, so a context that
//! exists always has a usable generator (or is explicitly unbound).

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::recording::RecordingIdGenerator;
use crate::adapters::unbound::UnboundIdGenerator;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::ports::id_gen::IdGenerator;
use crate::strategy::Strategy;

/// Owns the single generator instance shared by the whole service.
pub struct ServiceContext {
    strategy: Option<Strategy>,
    id_gen: Arc<dyn IdGenerator>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Builds the strategy selected by `config` (default `sha256`).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the strategy name is unknown or one of
    /// its settings is missing or malformed.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let strategy = Strategy::from_config(config)?;
        let id_gen = strategy.build(config)?;
        tracing::info!(strategy = %strategy, "activated ID generator");
        Ok(Self { strategy: Some(strategy), id_gen, recorder: None })
    }

    /// Context using the default strategy.
    #[must_use]
    pub fn live() -> Self {
        Self {
            strategy: Some(Strategy::Sha256),
            id_gen: Arc::new(crate::adapters::live::Sha256IdGenerator::new()),
            recorder: None,
        }
    }

    /// Wraps an externally constructed generator.
    #[must_use]
    pub fn with_generator(id_gen: Arc<dyn IdGenerator>) -> Self {
        Self { strategy: None, id_gen, recorder: None }
    }

    /// Context whose generator fails every call with `NotImplemented`.
    #[must_use]
    pub fn unbound() -> Self {
        Self::with_generator(Arc::new(UnboundIdGenerator))
    }

    /// Like [`ServiceContext::from_config`], but every successful derivation
    /// is also recorded to a cassette written by [`ServiceContext::finish`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] under the same conditions as `from_config`.
    pub fn recording(config: &GeneratorConfig, path: &Path) -> Result<Self, ConfigError> {
        let live = Self::from_config(config)?;
        let strategy = live.strategy.unwrap_or_default();
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "pubid-session", strategy.name())));
        Ok(Self {
            strategy: live.strategy,
            id_gen: Arc::new(RecordingIdGenerator::new(live.id_gen, Arc::clone(&recorder))),
            recorder: Some(recorder),
        })
    }

    /// The shared generator. Every call returns the same instance.
    #[must_use]
    pub fn get_active_generator(&self) -> Arc<dyn IdGenerator> {
        Arc::clone(&self.id_gen)
    }

    /// Strategy backing the generator, if it came from the registry.
    #[must_use]
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Writes the cassette for a recording context.
    ///
    /// Returns the cassette path, or `None` when not recording.
    ///
    /// # Errors
    ///
    /// Returns an error string if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder else {
            return Ok(None);
        };
        let guard = recorder.lock().map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        guard
            .write()
            .map(Some)
            .map_err(|e| format!("Failed to write cassette {}: {e}", guard.path().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use crate::error::IdGenError;
    use crate::mapping::Mapping;

    fn alice() -> Mapping {
        [("name", "alice"), ("domain", "default")].into_iter().collect()
    }

    #[test]
    fn default_config_selects_sha256() {
        let ctx = ServiceContext::from_config(&GeneratorConfig::default()).unwrap();
        assert_eq!(ctx.strategy(), Some(Strategy::Sha256));
        let id = ctx.get_active_generator().generate_public_id(&alice()).unwrap();
        assert_eq!(id.as_str(), "b4e00360717ade4c0e4c03117c92b4d7c1d72c353eec6e1641564639f9045799");
    }

    #[test]
    fn unknown_strategy_fails_at_construction() {
        let result = ServiceContext::from_config(&GeneratorConfig::with_strategy("md5"));
        assert!(matches!(result, Err(ConfigError::UnknownStrategy { .. })));
    }

    #[test]
    fn active_generator_is_a_single_shared_instance() {
        let ctx = ServiceContext::from_config(&GeneratorConfig::with_strategy("uuid5")).unwrap();
        let a = ctx.get_active_generator();
        let b = ctx.get_active_generator();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unbound_context_reports_not_implemented() {
        let ctx = ServiceContext::unbound();
        assert_eq!(ctx.strategy(), None);
        let err = ctx.get_active_generator().generate_public_id(&alice()).unwrap_err();
        assert!(matches!(err, IdGenError::NotImplemented(_)));
    }

    #[test]
    fn concurrent_callers_agree() {
        let ctx = ServiceContext::live();
        let expected = ctx.get_active_generator().generate_public_id(&alice()).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let gen = ctx.get_active_generator();
                    scope.spawn(move || gen.generate_public_id(&alice()).unwrap())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn recording_context_writes_cassette_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.cassette.yaml");
        let ctx = ServiceContext::recording(&GeneratorConfig::default(), &path).unwrap();

        let gen = ctx.get_active_generator();
        let id = gen.generate_public_id(&alice()).unwrap();
        gen.generate_public_id(&Mapping::new()).unwrap();
        drop(gen);

        assert_eq!(ctx.finish().unwrap(), Some(path.clone()));
        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.strategy, "sha256");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].public_id, id);
    }

    #[test]
    fn finish_without_recording_is_a_no_op() {
        assert_eq!(ServiceContext::live().finish().unwrap(), None);
    }
}
