//! Pokemon CRUD operations.

use std::sync::Arc;

use pokedex_domain::{NewPokemon, PokedexNo, Pokemon, PokemonId, PokemonPatch};

use crate::infrastructure::ports::{Page, PokemonRepo};

use super::error::{handle_exceptions, PokemonError};
use super::lookup::candidate_keys;

pub struct PokemonCrud {
    repo: Arc<dyn PokemonRepo>,
    default_limit: u64,
}

impl PokemonCrud {
    pub fn new(repo: Arc<dyn PokemonRepo>, default_limit: u64) -> Self {
        Self {
            repo,
            default_limit,
        }
    }

    /// Store a new record. The name is already lower-cased by `PokemonName`.
    pub async fn create(&self, pokemon: NewPokemon) -> Result<Pokemon, PokemonError> {
        let stored = self
            .repo
            .insert(&pokemon)
            .await
            .map_err(|e| handle_exceptions("create", e))?;

        tracing::info!(id = %stored.id, no = %stored.no, name = %stored.name, "Pokemon created");
        Ok(stored)
    }

    /// Records ordered by ascending `no`, paged by `limit` and `offset`.
    pub async fn find_all(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Vec<Pokemon>, PokemonError> {
        let page = Page::new(
            limit.unwrap_or(self.default_limit),
            offset.unwrap_or_default(),
        );
        self.repo
            .list(page)
            .await
            .map_err(|e| handle_exceptions("list", e))
    }

    /// Find a record by Pokedex number or identity key, whichever matches first.
    pub async fn find_one(&self, term: &str) -> Result<Pokemon, PokemonError> {
        for key in candidate_keys(term) {
            let found = key
                .fetch(self.repo.as_ref())
                .await
                .map_err(|e| handle_exceptions("find", e))?;
            if let Some(pokemon) = found {
                return Ok(pokemon);
            }
        }
        Err(PokemonError::not_found(term))
    }

    /// Patch the record whose Pokedex number is `term`.
    ///
    /// Returns the record as it was before the write, overlaid with the patch.
    /// The lookup and the write are not atomic.
    pub async fn update(&self, term: &str, patch: PokemonPatch) -> Result<Pokemon, PokemonError> {
        let no = PokedexNo::from_term(term).ok_or_else(|| PokemonError::not_found(term))?;

        let existing = self
            .repo
            .get_by_no(no)
            .await
            .map_err(|e| handle_exceptions("update", e))?
            .ok_or_else(|| PokemonError::not_found(term))?;

        self.repo
            .update(&existing.id, &patch)
            .await
            .map_err(|e| handle_exceptions("update", e))?;

        tracing::info!(id = %existing.id, "Pokemon updated");
        Ok(existing.merged(&patch))
    }

    pub async fn remove(&self, id: &PokemonId) -> Result<(), PokemonError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| handle_exceptions("delete", e))?;

        if deleted == 0 {
            return Err(PokemonError::not_deleted(id));
        }
        tracing::info!(id = %id, "Pokemon deleted");
        Ok(())
    }
}
