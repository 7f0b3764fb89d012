//! Error kinds surfaced by the Pokemon use cases.

use crate::infrastructure::ports::RepoError;

/// Failures of the Pokemon CRUD operations.
///
/// Every store failure is translated into exactly one of these, once, by
/// [`handle_exceptions`].
#[derive(Debug, thiserror::Error)]
pub enum PokemonError {
    /// Uniqueness violation, or a delete that matched nothing.
    #[error("{message}")]
    Duplicate {
        message: String,
        /// Conflicting key/value as reported by the store, when there is one.
        key_value: Option<String>,
    },

    #[error("Pokemon with id, name or no {term} not found")]
    NotFound { term: String },

    /// Unexpected store failure. The cause is logged, never returned.
    #[error("Can't {operation} Pokemon - Check server logs")]
    Internal { operation: &'static str },
}

impl PokemonError {
    pub fn duplicate(key_value: impl Into<String>) -> Self {
        let key_value = key_value.into();
        Self::Duplicate {
            message: format!("Pokemon exists in db {key_value}"),
            key_value: Some(key_value),
        }
    }

    /// A delete by identity key that removed nothing.
    pub fn not_deleted(id: impl std::fmt::Display) -> Self {
        Self::Duplicate {
            message: format!("Pokemon with {id} not found"),
            key_value: None,
        }
    }

    pub fn not_found(term: impl Into<String>) -> Self {
        Self::NotFound { term: term.into() }
    }
}

/// Translate a store failure raised while performing `operation`.
pub fn handle_exceptions(operation: &'static str, error: RepoError) -> PokemonError {
    match error {
        RepoError::Duplicate { key_value } => PokemonError::duplicate(key_value),
        other => {
            tracing::error!(error = %other, operation, "Pokemon store operation failed");
            PokemonError::Internal { operation }
        }
    }
}
