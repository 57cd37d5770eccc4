//! Default strategy: SHA-256 over the canonical mapping.

use sha2::{Digest, Sha256};

use crate::error::IdGenError;
use crate::mapping::Mapping;
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

/// Hashes the canonical JSON form of the mapping (keys and values) and
/// returns the 64-character lowercase hex digest.
#[derive(Debug, Clone, Copy)]
pub struct Sha256IdGenerator;

impl Sha256IdGenerator {
    /// Creates the generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for Sha256IdGenerator {
    fn generate_public_id(&self, mapping: &Mapping) -> Result<PublicId, IdGenError> {
        let digest = Sha256::digest(mapping.canonical_bytes());
        tracing::debug!(attributes = mapping.len(), "derived sha256 public id");
        PublicId::new(hex::encode(digest))
    }
}
