//! Attribute mappings and their canonical byte form.
//!
//! A [`Mapping`] is the input to every generation strategy. Its content is
//! what matters, never the order in which attributes were inserted, so all
//! strategies hash [`Mapping::canonical_bytes`] (or walk
//! [`Mapping::iter`], which is sorted by key).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An unordered set of attribute name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(BTreeMap<String, Value>);

impl Mapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Compact JSON encoding with keys sorted at every nesting level.
    ///
    /// Two mappings with equal content always produce identical bytes.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let object: Map<String, Value> =
            self.0.iter().map(|(k, v)| (k.clone(), canonical_value(v))).collect();
        Value::Object(object).to_string().into_bytes()
    }
}

/// Rebuilds `value` so that every nested object has its keys in sorted order.
///
/// `serde_json::Map` is only sorted when the `preserve_order` feature is off;
/// rebuilding from a sorted list keeps the encoding stable either way.
pub(crate) fn canonical_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k.clone(), canonical_value(v))).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(canonical_value).collect()),
        other => other.clone(),
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Map<String, Value>> for Mapping {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}
