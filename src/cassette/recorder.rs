//! Records derivations into a cassette file.

use std::path::{Path, PathBuf};

use chrono::Utc;

use super::format::{Cassette, Interaction};
use crate::mapping::Mapping;
use crate::public_id::PublicId;

/// Records derivations and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    strategy: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            strategy: strategy.into(),
            interactions: Vec::new(),
            next_seq: 0,
        }
    }

    /// Record a derivation. The `seq` field is assigned automatically.
    pub fn record(&mut self, mapping: &Mapping, public_id: &PublicId) {
        let interaction = Interaction {
            seq: self.next_seq,
            mapping: mapping.clone(),
            public_id: public_id.clone(),
        };
        self.next_seq += 1;
        self.interactions.push(interaction);
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Destination path of the cassette.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the cassette YAML file with the interactions recorded so far.
    ///
    /// The recorder stays usable; a later call rewrites the whole file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            strategy: self.strategy.clone(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}
