//! Cassette data structures for recorded ID derivations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mapping::Mapping;
use crate::public_id::PublicId;

/// A single recorded derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Mapping passed to the generator.
    pub mapping: Mapping,
    /// ID the generator returned.
    pub public_id: PublicId,
}

/// A cassette containing the derivations made by one strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Name of the strategy that produced the IDs.
    pub strategy: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a YAML cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn yaml_shape_is_readable() {
        let mut mapping = Mapping::new();
        mapping.insert("name", json!("alice"));
        let cassette = Cassette {
            name: "fixtures".into(),
            recorded_at: Utc::now(),
            strategy: "sha256".into(),
            interactions: vec![Interaction {
                seq: 0,
                mapping,
                public_id: PublicId::new("abc123").unwrap(),
            }],
        };
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        assert!(yaml.contains("strategy: sha256"));
        assert!(yaml.contains("public_id: abc123"));
        assert!(yaml.contains("name: alice"));
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Cassette::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }

    #[test]
    fn load_rejects_out_of_bounds_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(
            &path,
            "name: x\nrecorded_at: 2025-01-01T00:00:00Z\nstrategy: sha256\ninteractions:\n  - seq: 0\n    mapping: {}\n    public_id: \"not valid\"\n",
        )
        .unwrap();
        let err = Cassette::load(&path).unwrap_err();
        assert!(err.contains("Failed to parse cassette file"));
    }
}
