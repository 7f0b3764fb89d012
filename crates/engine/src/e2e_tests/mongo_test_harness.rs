//! MongoDB test harness for E2E testing.
//!
//! Provides testcontainer-based MongoDB instance management for integration tests.

use std::time::Duration;

use mongodb::Database;
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

use crate::infrastructure::mongo::{self, MongoPokemonRepo, POKEMON_COLLECTION};

/// Database name used inside test containers.
pub const TEST_DATABASE: &str = "pokedex-e2e";

/// MongoDB test harness managing container lifecycle.
pub struct MongoTestHarness {
    _container: ContainerAsync<GenericImage>,
    db: Database,
}

impl MongoTestHarness {
    /// Start a new MongoDB container, connect, and create the unique indexes.
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or connection cannot be established.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container: ContainerAsync<GenericImage> = mongo_image().start().await;
        let port = container.get_host_port_ipv4(27017).await;
        let uri = format!("mongodb://127.0.0.1:{port}/?serverSelectionTimeoutMS=2000");

        let db = connect_with_retry(&uri).await?;
        mongo::ensure_schema(&db).await?;

        Ok(Self {
            _container: container,
            db,
        })
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn repo(&self) -> MongoPokemonRepo {
        MongoPokemonRepo::new(&self.db)
    }

    /// Remove every document, keeping the indexes.
    pub async fn clean(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.db
            .collection::<mongodb::bson::Document>(POKEMON_COLLECTION)
            .delete_many(mongodb::bson::doc! {})
            .await?;
        Ok(())
    }
}

/// MongoDB container image pinned to a major version.
///
/// Readiness is verified by `connect_with_retry` rather than log parsing.
pub fn mongo_image() -> GenericImage {
    GenericImage::new("mongo", "7.0")
        .with_exposed_port(27017)
        .with_wait_for(WaitFor::seconds(2))
}

/// Connect to MongoDB with retry logic using exponential backoff.
///
/// Backoff: 250ms doubling up to 2s, at most 30 attempts.
pub async fn connect_with_retry(
    uri: &str,
) -> Result<Database, Box<dyn std::error::Error + Send + Sync>> {
    let max_attempts = 30;
    let max_delay = Duration::from_secs(2);

    let mut delay = Duration::from_millis(250);
    let mut last_err: Option<String> = None;

    for attempt in 1..=max_attempts {
        match mongo::connect(uri, TEST_DATABASE).await {
            Ok(db) => return Ok(db),
            Err(e) => last_err = Some(e.to_string()),
        }

        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis(),
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying MongoDB connection"
        );

        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Failed to connect to MongoDB at {uri} after {max_attempts} attempts: {:?}",
        last_err
    )
    .into())
}
