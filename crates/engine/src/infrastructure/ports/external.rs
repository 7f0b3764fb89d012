//! External service port traits.

use async_trait::async_trait;

use super::error::PokeApiError;
use super::types::PokeApiEntry;

/// Source of the reference Pokedex used by the seed operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokeApiPort: Send + Sync {
    /// Fetch the first `limit` entries of the Pokemon listing.
    async fn list_pokemon(&self, limit: u32) -> Result<Vec<PokeApiEntry>, PokeApiError>;
}
