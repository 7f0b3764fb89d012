//! HTTP error rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use pokedex_domain::DomainError;
use pokedex_shared::ErrorResponse;

use crate::use_cases::{PokemonError, SeedError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    BadGateway(String),
    /// Carries only a generic message; causes are logged where they occur.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> String {
        match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::BadGateway(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status_code: status.as_u16(),
            message: self.message(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<PokemonError> for ApiError {
    fn from(e: PokemonError) -> Self {
        match e {
            PokemonError::Duplicate { message, .. } => ApiError::BadRequest(message),
            e @ PokemonError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            e @ PokemonError::Internal { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SeedError> for ApiError {
    fn from(e: SeedError) -> Self {
        match e {
            SeedError::Fetch(source) => {
                tracing::error!(error = %source, "Seed source request failed");
                ApiError::BadGateway("Seed source unavailable - Check server logs".to_string())
            }
            SeedError::Pokemon(e) => e.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => ApiError::BadRequest(msg),
        }
    }
}

/// Flatten validator errors into one message, field by field.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", error.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
