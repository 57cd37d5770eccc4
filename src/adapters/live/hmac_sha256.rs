//! Keyed strategy: HMAC-SHA256 over the canonical mapping.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{ConfigError, IdGenError};
use crate::mapping::Mapping;
use crate::ports::IdGenerator;
use crate::public_id::PublicId;

type HmacSha256 = Hmac<Sha256>;

/// IDs that cannot be recomputed without the deployment secret.
///
/// The keyed MAC state is built once; each call clones it.
#[derive(Clone)]
pub struct HmacSha256IdGenerator {
    mac: HmacSha256,
}

impl HmacSha256IdGenerator {
    /// Strategy name used in error messages.
    pub const NAME: &'static str = "hmac-sha256";

    /// Creates a generator keyed by `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] for an empty secret.
    pub fn new(secret: &[u8]) -> Result<Self, ConfigError> {
        // HMAC accepts keys of any length, so only an empty secret is refused
        let mac = Some(secret)
            .filter(|s| !s.is_empty())
            .and_then(|s| HmacSha256::new_from_slice(s).ok())
            .ok_or(ConfigError::MissingSecret(Self::NAME))?;
        Ok(Self { mac })
    }
}

impl std::fmt::Debug for HmacSha256IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha256IdGenerator").finish_non_exhaustive()
    }
}

impl IdGenerator for HmacSha256IdGenerator {
    fn generate_public_id(&self, mapping: &Mapping) -> Result<PublicId, IdGenError> {
        let mut mac = self.mac.clone();
        mac.update(&mapping.canonical_bytes());
        PublicId::new(hex::encode(mac.finalize().into_bytes()))
    }
}
