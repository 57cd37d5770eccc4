//! Replays recorded derivations against a generator.

use super::format::{Cassette, Interaction};
use crate::error::IdGenError;
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

/// A recorded derivation that no longer reproduces.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Sequence number of the interaction in the cassette.
    pub seq: u64,
    /// ID stored in the cassette.
    pub expected: PublicId,
    /// What the generator produced now, or why it failed.
    pub actual: Result<PublicId, IdGenError>,
}

/// Outcome of replaying a cassette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationReport {
    /// Number of interactions re-derived.
    pub checked: usize,
    /// Interactions whose ID differs from the recording.
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    /// Returns `true` if every recorded ID was reproduced.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Re-derives every interaction of a loaded cassette.
pub struct CassetteReplayer {
    strategy: String,
    interactions: Vec<Interaction>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self { strategy: cassette.strategy.clone(), interactions: cassette.interactions.clone() }
    }

    /// Strategy name recorded in the cassette.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Runs every recorded mapping through `generator` in sequence order and
    /// compares against the recorded ID.
    #[must_use]
    pub fn verify(&self, generator: &dyn IdGenerator) -> VerificationReport {
        let mut report = VerificationReport::default();
        for interaction in &self.interactions {
            report.checked += 1;
            let actual = generator.generate_public_id(&interaction.mapping);
            if actual.as_ref() != Ok(&interaction.public_id) {
                tracing::debug!(seq = interaction.seq, "recorded public id did not reproduce");
                report.mismatches.push(Mismatch {
                    seq: interaction.seq,
                    expected: interaction.public_id.clone(),
                    actual,
                });
            }
        }
        report
    }
}
