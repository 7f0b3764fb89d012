//! Pokedex number - the human-facing alternate key

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A positive Pokedex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PokedexNo(u32);

impl PokedexNo {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `no` is zero.
    pub fn new(no: u32) -> Result<Self, DomainError> {
        if no == 0 {
            return Err(DomainError::validation("Pokedex number must be positive"));
        }
        Ok(Self(no))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Reads a free-form lookup term as a Pokedex number.
    ///
    /// The term is trimmed and read as a decimal number, so `"4.0"`, `"4e0"`
    /// and `" 4"` all name number 4. Fractions, zero and values past `u32`
    /// are not Pokedex numbers.
    pub fn from_term(term: &str) -> Option<Self> {
        let value: f64 = term.trim().parse().ok()?;
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < 1.0 || value > f64::from(u32::MAX) {
            return None;
        }
        Self::new(value as u32).ok()
    }
}

impl fmt::Display for PokedexNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a term that is entirely an integer, e.g. a path segment.
impl FromStr for PokedexNo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let no: u32 = s
            .parse()
            .map_err(|_| DomainError::validation(format!("{s} is not a Pokedex number")))?;
        Self::new(no)
    }
}

impl TryFrom<u32> for PokedexNo {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for PokedexNo {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let no = u32::try_from(value)
            .map_err(|_| DomainError::validation(format!("{value} is out of range")))?;
        Self::new(no)
    }
}

impl From<PokedexNo> for u32 {
    fn from(value: PokedexNo) -> Self {
        value.0
    }
}
