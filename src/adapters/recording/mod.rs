//! Recording adapters that capture derivations to cassettes.

pub mod id_gen;

pub use id_gen::RecordingIdGenerator;
