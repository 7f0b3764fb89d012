//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use super::pokeapi::DEFAULT_POKEAPI_BASE_URL;

/// Default page size for list requests without a `limit`.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Default number of PokeAPI entries fetched by the seed.
pub const DEFAULT_SEED_LIMIT: u32 = 650;

/// Which store backs the repository port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => bail!("Unknown STORE_BACKEND: {other} (expected \"mongo\" or \"memory\")"),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// MongoDB database name
    pub mongodb_database: String,
    /// Store backend: MongoDB or in-memory
    pub store_backend: StoreBackend,

    /// HTTP bind host
    pub server_host: String,
    /// HTTP bind port
    pub server_port: u16,

    /// Page size used when a list request has no `limit`
    pub default_limit: u64,

    /// PokeAPI base URL (seed source)
    pub pokeapi_base_url: String,
    /// Number of entries the seed fetches
    pub seed_limit: u32,

    /// CORS allowed origins (comma-separated, or "*" for any); empty disables CORS
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_database: "nest-pokemon".to_string(),
            store_backend: StoreBackend::Mongo,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            default_limit: DEFAULT_PAGE_LIMIT,
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            seed_limit: DEFAULT_SEED_LIMIT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let default_limit = match lookup("DEFAULT_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("DEFAULT_LIMIT must be a positive integer")?,
            None => defaults.default_limit,
        };
        if default_limit == 0 {
            bail!("DEFAULT_LIMIT must be a positive integer");
        }

        Ok(Self {
            mongodb_uri: lookup("MONGODB_URI")
                .or_else(|| lookup("MONGODB"))
                .unwrap_or(defaults.mongodb_uri),
            mongodb_database: lookup("MONGODB_DATABASE").unwrap_or(defaults.mongodb_database),
            store_backend: match lookup("STORE_BACKEND") {
                Some(raw) => raw.parse()?,
                None => defaults.store_backend,
            },

            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: match lookup("PORT").or_else(|| lookup("SERVER_PORT")) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .context("PORT must be a valid port number")?,
                None => defaults.server_port,
            },

            default_limit,

            pokeapi_base_url: lookup("POKEAPI_BASE_URL").unwrap_or(defaults.pokeapi_base_url),
            seed_limit: match lookup("SEED_LIMIT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .context("SEED_LIMIT must be a non-negative integer")?,
                None => defaults.seed_limit,
            },

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}
