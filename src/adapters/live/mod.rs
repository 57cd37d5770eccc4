//! Concrete ID generation strategies.

pub mod hmac_sha256;
pub mod sha256;
pub mod sha256_values;
pub mod uuid5;

pub use hmac_sha256::HmacSha256IdGenerator;
pub use sha256::Sha256IdGenerator;
pub use sha256_values::Sha256ValuesIdGenerator;
pub use uuid5::Uuid5IdGenerator;
