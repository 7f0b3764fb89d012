//! Response bodies returned by the HTTP API.

use serde::{Deserialize, Serialize};

use pokedex_domain::Pokemon;

/// Wire shape of a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub no: u32,
    pub name: String,
}

impl From<Pokemon> for PokemonResponse {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id.into(),
            no: pokemon.no.value(),
            name: pokemon.name.into(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    /// Canonical reason phrase of the status code
    pub error: String,
}
