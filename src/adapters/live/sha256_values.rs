//! Value-only SHA-256 strategy compatible with Keystone's `sha256` driver.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::IdGenError;
use crate::mapping::{canonical_value, Mapping};
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

/// Feeds each value into SHA-256 in ascending key order and hex-encodes the
/// digest. Keys themselves are not hashed.
///
/// String values contribute their raw UTF-8 bytes, which reproduces the IDs
/// Keystone mints for local users and groups. Other values contribute their
/// canonical JSON encoding.
///
/// Because keys are not hashed, `{}` and `{"a": ""}` share an ID. Use
/// [`Sha256IdGenerator`](super::sha256::Sha256IdGenerator) unless you need
/// to match IDs already issued by Keystone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256ValuesIdGenerator;

impl IdGenerator for Sha256ValuesIdGenerator {
    fn generate_public_id(&self, mapping: &Mapping) -> Result<PublicId, IdGenError> {
        let mut hasher = Sha256::new();
        for (_, value) in mapping.iter() {
            match value {
                Value::String(s) => hasher.update(s.as_bytes()),
                other => hasher.update(canonical_value(other).to_string().as_bytes()),
            }
        }
        PublicId::new(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_keystone_local_user_id() {
        let mapping: Mapping =
            [("local_id", "alice"), ("domain_id", "default")].into_iter().collect();
        // domain_id sorts first: sha256("default" + "alice")
        let id = Sha256ValuesIdGenerator.generate_public_id(&mapping).unwrap();
        assert_eq!(id.as_str(), "23bd6ed1395351103499d6bbaf8fcdf360a9d7025aef6e8770b5737fda40b427");
    }

    #[test]
    fn order_independent() {
        let a: Mapping = [("x", json!(1)), ("y", json!("two"))].into_iter().collect();
        let b: Mapping = [("y", json!("two")), ("x", json!(1))].into_iter().collect();
        assert_eq!(
            Sha256ValuesIdGenerator.generate_public_id(&a).unwrap(),
            Sha256ValuesIdGenerator.generate_public_id(&b).unwrap()
        );
    }

    #[test]
    fn keys_and_value_boundaries_do_not_contribute() {
        let id = |pairs: &[(&str, &str)]| {
            let m: Mapping = pairs.iter().copied().collect();
            Sha256ValuesIdGenerator.generate_public_id(&m).unwrap()
        };
        assert_eq!(id(&[("name", "alice")]), id(&[("user", "alice")]));
        assert_eq!(id(&[("a", "xy")]), id(&[("a", "x"), ("b", "y")]));
        assert_eq!(id(&[]), id(&[("a", "")]));
    }

    #[test]
    fn empty_differs_from_numeric_value() {
        let empty = Sha256ValuesIdGenerator.generate_public_id(&Mapping::new()).unwrap();
        let one: Mapping = [("a", json!(1))].into_iter().collect();
        assert_ne!(empty, Sha256ValuesIdGenerator.generate_public_id(&one).unwrap());
    }
}
