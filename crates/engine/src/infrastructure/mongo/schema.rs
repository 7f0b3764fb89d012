//! MongoDB schema initialization - unique indexes.

use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};

use super::document::POKEMON_COLLECTION;

/// Fields that must be unique across the collection.
const UNIQUE_FIELDS: [&str; 2] = ["no", "name"];

/// Initialize the unique indexes the repository relies on.
///
/// This should be called once on startup. Creating an index that already
/// exists with the same options is a no-op, so this is idempotent.
pub async fn ensure_schema(db: &Database) -> Result<(), mongodb::error::Error> {
    let collection = db.collection::<Document>(POKEMON_COLLECTION);

    for field in UNIQUE_FIELDS {
        let mut keys = Document::new();
        keys.insert(field, 1);
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(index).await?;
    }

    tracing::info!(
        collection = POKEMON_COLLECTION,
        "MongoDB schema initialized (unique indexes ensured)"
    );
    Ok(())
}
