//! Helper types for port operations.

/// A window over the records ordered by ascending Pokedex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of records to return
    pub limit: u64,
    /// Number of records to skip first
    pub offset: u64,
}

impl Page {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }
}

/// One entry of the PokeAPI `pokemon` listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PokeApiEntry {
    pub name: String,
    /// Resource url, e.g. `https://pokeapi.co/api/v2/pokemon/25/`
    pub url: String,
}
