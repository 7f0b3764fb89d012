//! MongoDB database implementations.

use mongodb::bson::doc;
use mongodb::{Client, Database};

mod document;
mod errors;
mod pokemon_repo;
mod schema;

pub use document::POKEMON_COLLECTION;
pub use pokemon_repo::MongoPokemonRepo;
pub use schema::ensure_schema;

/// Connect to MongoDB and verify the server answers a ping.
pub async fn connect(uri: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!(database, "MongoDB connection established and verified");
    Ok(db)
}
