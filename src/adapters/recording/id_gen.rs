//! Recording adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use crate::cassette::recorder::CassetteRecorder;
use crate::error::IdGenError;
use crate::mapping::Mapping;
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

/// Records derivations while delegating to an inner implementation.
pub struct RecordingIdGenerator {
    inner: Arc<dyn IdGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdGenerator {
    /// Creates a new recording ID generator wrapping the given implementation.
    pub fn new(inner: Arc<dyn IdGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_public_id(&self, mapping: &Mapping) -> Result<PublicId, IdGenError> {
        let result = self.inner.generate_public_id(mapping)?;
        match self.recorder.lock() {
            Ok(mut guard) => guard.record(mapping, &result),
            Err(_) => tracing::warn!("cassette recorder lock poisoned; derivation not recorded"),
        }
        Ok(result)
    }
}
