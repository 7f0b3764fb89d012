//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod pokemon;
pub mod seed;

pub use pokemon::{PokemonCrud, PokemonError};
pub use seed::{SeedError, SeedPokedex, SeedReport};
