//! PokeAPI client used to seed the database.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::ports::{PokeApiEntry, PokeApiError, PokeApiPort};

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the public PokeAPI REST service
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

/// Listing envelope of `GET /pokemon`
#[derive(Debug, Deserialize)]
struct PokemonListResponse {
    results: Vec<PokeApiEntry>,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PokeApiPort for PokeApiClient {
    async fn list_pokemon(&self, limit: u32) -> Result<Vec<PokeApiEntry>, PokeApiError> {
        let response = self
            .client
            .get(format!("{}/pokemon", self.base_url))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| PokeApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PokeApiError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let listing: PokemonListResponse = response
            .json()
            .await
            .map_err(|e| PokeApiError::InvalidResponse(e.to_string()))?;

        tracing::debug!(count = listing.results.len(), "Fetched PokeAPI listing");
        Ok(listing.results)
    }
}
