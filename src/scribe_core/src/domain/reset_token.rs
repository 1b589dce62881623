use std::fmt;

use rand::{TryRngCore, rngs::OsRng};
use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResetTokenError {
    #[error("Failed to gather entropy for reset token: {0}")]
    Entropy(String),
}

/// Opaque single-use password-reset token: 32 random bytes, lowercase hex.
///
/// Carries no structure; it is only valid by lookup against the stored copy.
#[derive(Clone)]
pub struct ResetToken(String);

impl ResetToken {
    pub const BYTE_LENGTH: usize = 32;

    /// Draw a fresh token from the operating system's CSPRNG.
    pub fn generate() -> Result<Self, ResetTokenError> {
        let mut bytes = [0u8; Self::BYTE_LENGTH];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| ResetTokenError::Entropy(e.to_string()))?;

        Ok(Self(hex::encode(bytes)))
    }

    /// Wrap a token presented by a caller. No format check: a malformed
    /// token simply never matches a stored one.
    pub fn from_presented(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compares in constant time for tokens of equal length.
impl PartialEq for ResetToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl Eq for ResetToken {}

impl fmt::Debug for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResetToken([REDACTED])")
    }
}
