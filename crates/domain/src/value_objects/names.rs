//! Validated name newtype for Pokemon records
//!
//! Names are normalized by construction:
//! - Non-empty (whitespace-only is rejected)
//! - Lower-cased, so uniqueness is case-insensitive at the store

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated, lower-cased Pokemon name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PokemonName(String);

impl PokemonName {
    /// Create a new validated Pokemon name, lower-casing the input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Pokemon name cannot be empty"));
        }
        Ok(Self(name.to_lowercase()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PokemonName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PokemonName> for String {
    fn from(name: PokemonName) -> String {
        name.0
    }
}
