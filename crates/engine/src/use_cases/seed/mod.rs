//! Seed use case: rebuild the collection from the PokeAPI listing.

use std::sync::Arc;

use pokedex_domain::{NewPokemon, PokedexNo, PokemonName};

use crate::infrastructure::ports::{PokeApiEntry, PokeApiError, PokeApiPort, PokemonRepo};
use crate::use_cases::pokemon::{handle_exceptions, PokemonError};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed source unavailable: {0}")]
    Fetch(#[from] PokeApiError),
    #[error(transparent)]
    Pokemon(#[from] PokemonError),
}

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub deleted: u64,
    pub inserted: usize,
    pub skipped: usize,
}

pub struct SeedPokedex {
    repo: Arc<dyn PokemonRepo>,
    pokeapi: Arc<dyn PokeApiPort>,
    seed_limit: u32,
}

impl SeedPokedex {
    pub fn new(repo: Arc<dyn PokemonRepo>, pokeapi: Arc<dyn PokeApiPort>, seed_limit: u32) -> Self {
        Self {
            repo,
            pokeapi,
            seed_limit,
        }
    }

    /// Wipe the collection and insert the first `seed_limit` PokeAPI entries.
    pub async fn execute(&self) -> Result<SeedReport, SeedError> {
        let deleted = self
            .repo
            .delete_all()
            .await
            .map_err(|e| handle_exceptions("seed", e))?;

        let entries = self.pokeapi.list_pokemon(self.seed_limit).await?;
        let total = entries.len();
        let records: Vec<NewPokemon> = entries.iter().filter_map(to_new_pokemon).collect();
        let skipped = total - records.len();

        let inserted = self
            .repo
            .insert_many(&records)
            .await
            .map_err(|e| handle_exceptions("seed", e))?;

        tracing::info!(deleted, inserted, skipped, "Seed executed");
        Ok(SeedReport {
            deleted,
            inserted,
            skipped,
        })
    }
}

fn to_new_pokemon(entry: &PokeApiEntry) -> Option<NewPokemon> {
    let Some(no) = pokedex_no_from_url(&entry.url) else {
        tracing::warn!(url = %entry.url, name = %entry.name, "Skipping PokeAPI entry without a Pokedex number");
        return None;
    };
    match PokemonName::new(&entry.name) {
        Ok(name) => Some(NewPokemon::new(no, name)),
        Err(e) => {
            tracing::warn!(error = %e, url = %entry.url, "Skipping PokeAPI entry with an invalid name");
            None
        }
    }
}

/// Pokedex number from the last non-empty path segment of a resource url,
/// e.g. `https://pokeapi.co/api/v2/pokemon/25/` gives 25.
pub fn pokedex_no_from_url(url: &str) -> Option<PokedexNo> {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryPokemonRepo;
    use crate::infrastructure::ports::{MockPokeApiPort, MockPokemonRepo, Page, RepoError};
    use mockall::predicate::*;

    fn entry(name: &str, url: &str) -> PokeApiEntry {
        PokeApiEntry {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn parses_no_from_resource_url() {
        let no = |url| pokedex_no_from_url(url).map(PokedexNo::value);
        assert_eq!(no("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(no("https://pokeapi.co/api/v2/pokemon/1"), Some(1));
        assert_eq!(no("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(no("https://pokeapi.co/api/v2/pokemon/0/"), None);
        assert_eq!(no(""), None);
    }

    #[tokio::test]
    async fn replaces_existing_records() {
        let repo = Arc::new(InMemoryPokemonRepo::new());
        repo.insert(&NewPokemon::new(
            PokedexNo::new(999).expect("no"),
            PokemonName::new("missingno").expect("name"),
        ))
        .await
        .expect("insert");

        let mut pokeapi = MockPokeApiPort::new();
        pokeapi
            .expect_list_pokemon()
            .with(eq(3))
            .returning(|_| {
                Ok(vec![
                    entry("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
                    entry("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
                    entry("broken", "https://pokeapi.co/api/v2/pokemon/"),
                ])
            });

        let seed = SeedPokedex::new(repo.clone(), Arc::new(pokeapi), 3);
        let report = seed.execute().await.expect("seed");

        assert_eq!(
            report,
            SeedReport {
                deleted: 1,
                inserted: 2,
                skipped: 1
            }
        );
        let stored = repo.list(Page::new(10, 0)).await.expect("list");
        let names: Vec<&str> = stored.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_after_wipe() {
        let mut repo = MockPokemonRepo::new();
        repo.expect_delete_all().times(1).returning(|| Ok(0));
        repo.expect_insert_many().never();

        let mut pokeapi = MockPokeApiPort::new();
        pokeapi
            .expect_list_pokemon()
            .returning(|_| Err(PokeApiError::RequestFailed("HTTP 503".into())));

        let seed = SeedPokedex::new(Arc::new(repo), Arc::new(pokeapi), 650);
        let err = seed.execute().await.unwrap_err();
        assert!(matches!(err, SeedError::Fetch(_)));
    }

    #[tokio::test]
    async fn duplicate_upstream_entries_surface_as_duplicate() {
        let mut repo = MockPokemonRepo::new();
        repo.expect_delete_all().returning(|| Ok(0));
        repo.expect_insert_many()
            .returning(|_| Err(RepoError::duplicate("{ no: 1 }")));

        let mut pokeapi = MockPokeApiPort::new();
        pokeapi.expect_list_pokemon().returning(|_| {
            Ok(vec![
                entry("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
                entry("bulbasaur-clone", "https://pokeapi.co/api/v2/pokemon/1/"),
            ])
        });

        let seed = SeedPokedex::new(Arc::new(repo), Arc::new(pokeapi), 2);
        let err = seed.execute().await.unwrap_err();
        assert!(matches!(
            err,
            SeedError::Pokemon(PokemonError::Duplicate { .. })
        ));
    }
}
