//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A write violated a unique index. `key_value` names the conflicting
    /// key and value as reported by the store, e.g. `{ no: 25 }`.
    #[error("Duplicate key: {key_value}")]
    Duplicate { key_value: String },

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Duplicate error from the store's key/value description.
    pub fn duplicate(key_value: impl ToString) -> Self {
        Self::Duplicate {
            key_value: key_value.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a uniqueness violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Errors from the PokeAPI source used for seeding.
#[derive(Debug, thiserror::Error)]
pub enum PokeApiError {
    #[error("PokeAPI request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid PokeAPI response: {0}")]
    InvalidResponse(String),
}
