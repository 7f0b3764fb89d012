//! MongoDB Pokemon repository implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use pokedex_domain::{NewPokemon, PokedexNo, Pokemon, PokemonId, PokemonPatch};

use super::document::{object_id, PokemonDocument, POKEMON_COLLECTION};
use super::errors::map_mongo_error;
use crate::infrastructure::ports::{Page, PokemonRepo, RepoError};

/// Repository for Pokemon operations.
pub struct MongoPokemonRepo {
    collection: Collection<PokemonDocument>,
}

impl MongoPokemonRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(POKEMON_COLLECTION),
        }
    }

    async fn find_one(
        &self,
        operation: &'static str,
        filter: Document,
    ) -> Result<Option<Pokemon>, RepoError> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|e| map_mongo_error(operation, e))?
            .map(Pokemon::try_from)
            .transpose()
    }
}

/// `$set` body for a patch; empty when the patch changes nothing.
fn set_document(patch: &PokemonPatch) -> Document {
    let mut set = Document::new();
    if let Some(no) = patch.no {
        set.insert("no", i64::from(no.value()));
    }
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    set
}

#[async_trait]
impl PokemonRepo for MongoPokemonRepo {
    async fn insert(&self, pokemon: &NewPokemon) -> Result<Pokemon, RepoError> {
        let document = PokemonDocument::for_insert(pokemon);
        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| map_mongo_error("insert_one", e))?;
        Pokemon::try_from(document)
    }

    async fn insert_many(&self, pokemon: &[NewPokemon]) -> Result<usize, RepoError> {
        if pokemon.is_empty() {
            return Ok(0);
        }
        let documents: Vec<PokemonDocument> =
            pokemon.iter().map(PokemonDocument::for_insert).collect();
        let result = self
            .collection
            .insert_many(&documents)
            .await
            .map_err(|e| map_mongo_error("insert_many", e))?;
        Ok(result.inserted_ids.len())
    }

    async fn update(&self, id: &PokemonId, patch: &PokemonPatch) -> Result<(), RepoError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.collection
            .update_one(
                doc! { "_id": object_id(id)? },
                doc! { "$set": set_document(patch) },
            )
            .await
            .map_err(|e| map_mongo_error("update_one", e))?;
        Ok(())
    }

    async fn delete(&self, id: &PokemonId) -> Result<u64, RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(|e| map_mongo_error("delete_one", e))?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| map_mongo_error("delete_many", e))?;
        Ok(result.deleted_count)
    }

    async fn list(&self, page: Page) -> Result<Vec<Pokemon>, RepoError> {
        let limit = i64::try_from(page.limit).unwrap_or(i64::MAX);
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "no": 1 })
            .skip(page.offset)
            .limit(limit)
            .projection(doc! { "__v": 0 })
            .await
            .map_err(|e| map_mongo_error("find", e))?;

        let documents: Vec<PokemonDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| map_mongo_error("find", e))?;

        documents.into_iter().map(Pokemon::try_from).collect()
    }

    async fn get(&self, id: &PokemonId) -> Result<Option<Pokemon>, RepoError> {
        self.find_one("find_by_id", doc! { "_id": object_id(id)? })
            .await
    }

    async fn get_by_no(&self, no: PokedexNo) -> Result<Option<Pokemon>, RepoError> {
        self.find_one("find_by_no", doc! { "no": i64::from(no.value()) })
            .await
    }
}
