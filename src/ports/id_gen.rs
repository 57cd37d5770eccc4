//! ID generator port for deriving public identifiers from mappings.

use crate::error::IdGenError;
use crate::mapping::Mapping;
use crate::public_id::PublicId;

/// Derives reproducible public IDs from attribute mappings.
///
/// Implementations must be pure: the same mapping content always yields the
/// same ID, independent of key order, and no call mutates shared state.
/// Any strategy satisfying this contract can be swapped in behind the port.
pub trait IdGenerator: Send + Sync {
    /// Returns the public ID for `mapping`.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenError::NotImplemented`] when no concrete strategy is
    /// bound, or [`IdGenError::InvalidPublicId`] if a strategy produced an
    /// out-of-bounds value.
    fn generate_public_id(&self, mapping: &Mapping) -> Result<PublicId, IdGenError>;
}
