//! Stored document shape of the `pokemons` collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use pokedex_domain::{NewPokemon, PokedexNo, Pokemon, PokemonId, PokemonName};

use crate::infrastructure::ports::RepoError;

/// Name of the collection holding Pokemon records.
pub const POKEMON_COLLECTION: &str = "pokemons";

/// A record as stored. Documents written by other tooling may also carry a
/// `__v` revision field; it is ignored on read and projected away on list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub no: i64,
    pub name: String,
}

impl PokemonDocument {
    /// Build the document for a fresh insert with a newly generated id.
    pub fn for_insert(pokemon: &NewPokemon) -> Self {
        Self {
            id: ObjectId::new(),
            no: i64::from(pokemon.no.value()),
            name: pokemon.name.as_str().to_string(),
        }
    }
}

impl TryFrom<PokemonDocument> for Pokemon {
    type Error = RepoError;

    fn try_from(document: PokemonDocument) -> Result<Self, Self::Error> {
        let id = PokemonId::parse(&document.id.to_hex()).map_err(RepoError::serialization)?;
        let no = PokedexNo::try_from(document.no).map_err(RepoError::serialization)?;
        let name = PokemonName::new(document.name).map_err(RepoError::serialization)?;
        Ok(Pokemon::new(id, no, name))
    }
}

/// Convert a validated identity key into the driver's ObjectId.
pub fn object_id(id: &PokemonId) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(id.as_str()).map_err(RepoError::serialization)
}
