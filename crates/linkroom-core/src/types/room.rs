//! Room codes: normalization, validation, and generation.
//!
//! A room is not persisted anywhere; its code only partitions link store
//! queries and appears in share URLs, so it is restricted to `[a-z0-9-]`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Prefix of every generated room code.
pub const GENERATED_PREFIX: &str = "qls-";

/// Number of random base36 characters after [`GENERATED_PREFIX`].
pub const GENERATED_SUFFIX_LEN: usize = 7;

/// Message shown when a room code normalizes to nothing.
pub const INVALID_ROOM_MESSAGE: &str = "Enter a valid room code.";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Trim, lowercase, and strip every character outside `[a-z0-9-]`.
///
/// An empty result means the input does not name a room.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// A normalized, non-empty room code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode(String);

impl RoomCode {
    /// Normalize `input` and accept it if anything is left.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let code = normalize(input);
        if code.is_empty() {
            return Err(AppError::validation(INVALID_ROOM_MESSAGE));
        }
        Ok(Self(code))
    }

    /// Generate a fresh code: `qls-` followed by seven random base36 characters.
    ///
    /// No collision check is made.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..GENERATED_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{GENERATED_PREFIX}{suffix}"))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoomCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoomCode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.0
    }
}

impl AsRef<str> for RoomCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
