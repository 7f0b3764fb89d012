//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (MongoDB in production, in-memory for development and tests)
//! - The PokeAPI listing used by the seed operation

mod error;
mod external;
mod repos;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PokemonRepo;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::PokeApiPort;

// =============================================================================
// Types
// =============================================================================
pub use types::{Page, PokeApiEntry};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockPokeApiPort;
#[cfg(test)]
pub use repos::MockPokemonRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{PokeApiError, RepoError};
