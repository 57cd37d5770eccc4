//! Adapters implementing the `IdGenerator` port.

pub mod live;
pub mod recording;
pub mod unbound;
