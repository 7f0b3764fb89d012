use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Length of a hex-encoded document identity key (12 bytes).
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// Store-assigned identity key of a Pokemon record.
///
/// Always 24 lower-case hex characters. The store generates it on insert and
/// it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PokemonId(String);

impl PokemonId {
    /// Parse a hex identity key, accepting either letter case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` unless the input is exactly 24 hex digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(raw) {
            return Err(DomainError::invalid_id(format!(
                "{raw} is not a valid MongoID"
            )));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Whether `raw` is syntactically an identity key.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == OBJECT_ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PokemonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PokemonId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PokemonId> for String {
    fn from(value: PokemonId) -> Self {
        value.0
    }
}
