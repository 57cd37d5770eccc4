//! Name-based UUID strategy.

use uuid::Uuid;

use crate::error::IdGenError;
use crate::mapping::Mapping;
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

/// Produces a version 5 UUID of the canonical mapping under a namespace,
/// rendered in 32-character simple form.
#[derive(Debug, Clone, Copy)]
pub struct Uuid5IdGenerator {
    namespace: Uuid,
}

impl Uuid5IdGenerator {
    /// Namespace used when none is configured.
    pub const DEFAULT_NAMESPACE: Uuid = Uuid::NAMESPACE_OID;

    /// Creates a generator deriving IDs under `namespace`.
    #[must_use]
    pub fn new(namespace: Uuid) -> Self {
        Self { namespace }
    }
}

impl Default for Uuid5IdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMESPACE)
    }
}

impl IdGenerator for Uuid5IdGenerator {
    fn generate_public_id(&self, mapping: &Mapping) -> Result<PublicId, IdGenError> {
        let id = Uuid::new_v5(&self.namespace, &mapping.canonical_bytes());
        PublicId::new(id.simple().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Mapping {
        [("domain", "default"), ("name", "alice")].into_iter().collect()
    }

    #[test]
    fn known_answer_under_default_namespace() {
        let id = Uuid5IdGenerator::default().generate_public_id(&alice()).unwrap();
        assert_eq!(id.as_str(), "7058416c854d5b86893ee4e235cd99aa");
        assert_eq!(id.as_str().len(), 32);
    }

    #[test]
    fn namespace_changes_the_id() {
        let a = Uuid5IdGenerator::default().generate_public_id(&alice()).unwrap();
        let b = Uuid5IdGenerator::new(Uuid::NAMESPACE_DNS).generate_public_id(&alice()).unwrap();
        assert_ne!(a, b);
    }
}
