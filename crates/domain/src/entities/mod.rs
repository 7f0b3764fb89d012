//! Domain entities - Core business objects with identity

mod pokemon;

pub use pokemon::{NewPokemon, Pokemon, PokemonPatch};
