//! In-memory repository implementations.
//!
//! Used when `STORE_BACKEND=memory` and as the substitute store in tests.
//! Unique keys are enforced the same way the MongoDB indexes enforce them, and
//! violations are reported in the same `{ field: value }` form.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use pokedex_domain::{NewPokemon, PokedexNo, Pokemon, PokemonId, PokemonName, PokemonPatch};

use crate::infrastructure::ports::{Page, PokemonRepo, RepoError};

/// In-memory Pokemon repository.
///
/// Writers hold the lock across the uniqueness check and the write, so the
/// check cannot race another insert.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPokemonRepo {
    pokemon: Arc<RwLock<BTreeMap<PokemonId, Pokemon>>>,
}

impl InMemoryPokemonRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn generate_id() -> Result<PokemonId, RepoError> {
    PokemonId::parse(&ObjectId::new().to_hex()).map_err(RepoError::serialization)
}

/// Reject `no` or `name` already held by a record other than `except`.
fn check_unique(
    records: &BTreeMap<PokemonId, Pokemon>,
    no: Option<PokedexNo>,
    name: Option<&PokemonName>,
    except: Option<&PokemonId>,
) -> Result<(), RepoError> {
    for existing in records.values() {
        if Some(&existing.id) == except {
            continue;
        }
        if no == Some(existing.no) {
            return Err(RepoError::duplicate(format!("{{ no: {} }}", existing.no)));
        }
        if name == Some(&existing.name) {
            return Err(RepoError::duplicate(format!(
                "{{ name: \"{}\" }}",
                existing.name
            )));
        }
    }
    Ok(())
}

fn insert_locked(
    records: &mut BTreeMap<PokemonId, Pokemon>,
    pokemon: &NewPokemon,
) -> Result<Pokemon, RepoError> {
    check_unique(records, Some(pokemon.no), Some(&pokemon.name), None)?;
    let stored = pokemon.clone().with_id(generate_id()?);
    records.insert(stored.id.clone(), stored.clone());
    Ok(stored)
}

#[async_trait]
impl PokemonRepo for InMemoryPokemonRepo {
    async fn insert(&self, pokemon: &NewPokemon) -> Result<Pokemon, RepoError> {
        let mut records = self.pokemon.write().await;
        insert_locked(&mut records, pokemon)
    }

    /// Ordered insert: stops at the first violation, keeping earlier records.
    async fn insert_many(&self, pokemon: &[NewPokemon]) -> Result<usize, RepoError> {
        let mut records = self.pokemon.write().await;
        for new in pokemon {
            insert_locked(&mut records, new)?;
        }
        Ok(pokemon.len())
    }

    async fn update(&self, id: &PokemonId, patch: &PokemonPatch) -> Result<(), RepoError> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut records = self.pokemon.write().await;
        let Some(current) = records.get(id) else {
            return Ok(());
        };
        let merged = current.merged(patch);
        check_unique(&records, patch.no, patch.name.as_ref(), Some(id))?;
        records.insert(id.clone(), merged);
        Ok(())
    }

    async fn delete(&self, id: &PokemonId) -> Result<u64, RepoError> {
        let mut records = self.pokemon.write().await;
        Ok(u64::from(records.remove(id).is_some()))
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut records = self.pokemon.write().await;
        let deleted = records.len() as u64;
        records.clear();
        Ok(deleted)
    }

    async fn list(&self, page: Page) -> Result<Vec<Pokemon>, RepoError> {
        let records = self.pokemon.read().await;
        let mut sorted: Vec<Pokemon> = records.values().cloned().collect();
        sorted.sort_by_key(|p| p.no);

        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(sorted.into_iter().skip(offset).take(limit).collect())
    }

    async fn get(&self, id: &PokemonId) -> Result<Option<Pokemon>, RepoError> {
        Ok(self.pokemon.read().await.get(id).cloned())
    }

    async fn get_by_no(&self, no: PokedexNo) -> Result<Option<Pokemon>, RepoError> {
        let records = self.pokemon.read().await;
        Ok(records.values().find(|p| p.no == no).cloned())
    }
}
