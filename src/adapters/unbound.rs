//! Placeholder generator for a context with no strategy wired in.

use crate::error::IdGenError;
use crate::mapping::Mapping;
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

/// Fails every call with [`IdGenError::NotImplemented`].
///
/// Reaching this adapter means the service was assembled without binding a
/// concrete strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboundIdGenerator;

impl IdGenerator for UnboundIdGenerator {
    fn generate_public_id(&self, _mapping: &Mapping) -> Result<PublicId, IdGenError> {
        Err(IdGenError::NotImplemented(
            "no concrete ID generation strategy is bound to this context".to_string(),
        ))
    }
}
