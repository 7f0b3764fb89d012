//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::{PokeApiPort, PokemonRepo};
use crate::use_cases::{PokemonCrud, SeedPokedex};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub pokemon: PokemonCrud,
    pub seed: SeedPokedex,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repo: Arc<dyn PokemonRepo>,
        pokeapi: Arc<dyn PokeApiPort>,
        config: &AppConfig,
    ) -> Self {
        let use_cases = UseCases {
            pokemon: PokemonCrud::new(repo.clone(), config.default_limit),
            seed: SeedPokedex::new(repo, pokeapi, config.seed_limit),
        };

        Self { use_cases }
    }
}
