//! Pokemon use cases: CRUD over the document store with polymorphic lookup.

mod crud;
mod error;
pub mod lookup;

pub use crud::PokemonCrud;
pub use error::{handle_exceptions, PokemonError};
