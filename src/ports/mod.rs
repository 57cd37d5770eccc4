//! Port traits defining external boundaries.
//!
//! The ID generator is the only boundary the rest of an identity service
//! needs; concrete strategies live in `src/adapters/`.

pub mod id_gen;

pub use id_gen::IdGenerator;
