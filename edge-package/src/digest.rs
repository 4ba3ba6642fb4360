//! SHA-512 content digest of a package binary.

use sha2::{Digest, Sha512};
use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

/// Length of a hex-encoded SHA-512 digest.
pub const DIGEST_HEX_LEN: usize = 128;

/// Lowercase hex SHA-512 digest. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Hash an in-memory buffer.
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha512::new();
        hasher.update(data);
        Self::finalize(hasher)
    }

    /// Stream `reader` to its end through a fresh SHA-512 accumulator.
    ///
    /// Content is fed in chunks by `io::copy` and never held as a whole.
    pub fn from_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut hasher = Sha512::new();
        io::copy(reader, &mut hasher)?;
        Ok(Self::finalize(hasher))
    }

    fn finalize(hasher: Sha512) -> Self {
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestParseError {
    #[error("digest must be 128 hex characters, got {0}")]
    Length(usize),

    #[error("digest contains {0:?}, expected lowercase hex")]
    InvalidCharacter(char),
}

/// Parses a previously recorded digest. Only the exact form produced by the
/// validator is accepted: 128 lowercase hex characters.
impl FromStr for ContentDigest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != DIGEST_HEX_LEN {
            return Err(DigestParseError::Length(len));
        }
        if let Some(bad) = s
            .chars()
            .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(DigestParseError::InvalidCharacter(bad));
        }
        Ok(Self(s.to_string()))
    }
}
