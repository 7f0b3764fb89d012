//! Value objects - Immutable objects defined by their attributes

mod names;
mod pokedex_no;

pub use names::PokemonName;
pub use pokedex_no::PokedexNo;
