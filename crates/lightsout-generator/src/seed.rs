//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use rand::RngCore as _;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed driving one grid generation run.
///
/// Seeds render as 64 lowercase hex digits and parse back from the same
/// form, so a puzzle can be reproduced from its printed seed. A seed can
/// also be derived from an arbitrary phrase, which makes "daily puzzle"
/// style generation a one-liner.
///
/// # Example
///
/// ```
/// use lightsout_generator::GridSeed;
///
/// let seed = GridSeed::from_phrase("2026-08-06");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<GridSeed>(), Ok(seed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSeed([u8; Self::LEN]);

impl GridSeed {
    /// Number of bytes in a seed.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; Self::LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from a phrase by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Display for GridSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for GridSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridSeed({self})")
    }
}

impl FromStr for GridSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN * 2 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; Self::LEN];
        for (i, c) in s.chars().enumerate() {
            let Some(digit) = c.to_digit(16) else {
                return Err(ParseSeedError::InvalidDigit { c });
            };
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | digit;
        }
        Ok(Self(bytes))
    }
}

/// Errors that can occur when parsing a seed from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text was not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text in bytes.
        len: usize,
    },
    /// The text contained a non-hex character.
    #[display("invalid hex digit: {c:?}")]
    InvalidDigit {
        /// The offending character.
        c: char,
    },
}
