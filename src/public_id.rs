//! The opaque identifier returned by every generator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdGenError;

/// Upper bound on the length of a public ID.
pub const MAX_LEN: usize = 64;

/// A deterministic, opaque identifier of at most [`MAX_LEN`] characters.
///
/// Only `[A-Za-z0-9_-]` is allowed. Callers must not rely on any other
/// structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicId(String);

impl PublicId {
    /// Validates `value` against the public ID bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenError::InvalidPublicId`] if the value is empty, longer
    /// than [`MAX_LEN`], or contains a character outside the safe alphabet.
    pub fn new(value: impl Into<String>) -> Result<Self, IdGenError> {
        let value = value.into();
        let reason = if value.is_empty() {
            Some("empty")
        } else if value.len() > MAX_LEN {
            Some("longer than 64 characters")
        } else if !value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            Some("contains characters outside [A-Za-z0-9_-]")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(IdGenError::InvalidPublicId { value, reason }),
            None => Ok(Self(value)),
        }
    }

    /// Borrows the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PublicId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PublicId {
    type Error = IdGenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PublicId> for String {
    fn from(id: PublicId) -> Self {
        id.0
    }
}
