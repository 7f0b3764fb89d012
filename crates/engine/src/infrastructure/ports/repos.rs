//! Repository port traits for database access.

use async_trait::async_trait;
use pokedex_domain::{NewPokemon, PokedexNo, Pokemon, PokemonId, PokemonPatch};

use super::error::RepoError;
use super::types::Page;

// =============================================================================
// Document Store Port
// =============================================================================

/// Access to the Pokemon collection.
///
/// Implementations must enforce uniqueness of `no` and `name` and report a
/// violation as [`RepoError::Duplicate`]; every other failure is some other
/// `RepoError` variant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonRepo: Send + Sync {
    // Writes
    async fn insert(&self, pokemon: &NewPokemon) -> Result<Pokemon, RepoError>;
    async fn insert_many(&self, pokemon: &[NewPokemon]) -> Result<usize, RepoError>;
    async fn update(&self, id: &PokemonId, patch: &PokemonPatch) -> Result<(), RepoError>;
    /// Returns how many records were deleted (0 or 1).
    async fn delete(&self, id: &PokemonId) -> Result<u64, RepoError>;
    async fn delete_all(&self) -> Result<u64, RepoError>;

    // Queries
    async fn list(&self, page: Page) -> Result<Vec<Pokemon>, RepoError>;
    async fn get(&self, id: &PokemonId) -> Result<Option<Pokemon>, RepoError>;
    async fn get_by_no(&self, no: PokedexNo) -> Result<Option<Pokemon>, RepoError>;
}
