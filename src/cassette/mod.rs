//! Cassettes of recorded derivations, used to prove IDs stay reproducible.

pub mod format;
pub mod recorder;
pub mod replayer;
