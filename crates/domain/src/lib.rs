//! Pokedex domain: the Pokemon record, its keys, and their invariants.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{NewPokemon, Pokemon, PokemonPatch};
pub use error::DomainError;
pub use ids::{PokemonId, OBJECT_ID_HEX_LEN};
pub use value_objects::{PokedexNo, PokemonName};
