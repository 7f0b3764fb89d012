//! Correlation ID tracking for request tracing.
//!
//! Every HTTP request gets a fresh id. It is recorded on the request's trace
//! span and echoed in the `x-correlation-id` response header, so a generic
//! 500 response can be matched to the log line that carries its cause.

use std::fmt;

use axum::http::{HeaderName, HeaderValue, Request};
use uuid::Uuid;

/// Response header carrying the request's correlation id.
pub const CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Correlation ID for tracking requests across the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Generate a new correlation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn header_value(&self) -> HeaderValue {
        // A hyphenated uuid is always a valid header value.
        HeaderValue::from_str(&self.0.to_string()).unwrap_or(HeaderValue::from_static(""))
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag `request` with a new correlation id and return it.
pub fn assign<B>(request: &mut Request<B>) -> CorrelationId {
    let id = CorrelationId::new();
    request.extensions_mut().insert(id);
    id
}

/// Span for one HTTP request, carrying its correlation id.
pub fn request_span<B>(request: &Request<B>) -> tracing::Span {
    let correlation_id = request
        .extensions()
        .get::<CorrelationId>()
        .map(CorrelationId::to_string)
        .unwrap_or_default();
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        correlation_id = %correlation_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = CorrelationId::new();
        let id2 = CorrelationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn header_value_is_the_hyphenated_uuid() {
        let id = CorrelationId::new();
        let value = id.header_value();
        assert_eq!(value.to_str().expect("ascii"), id.to_string());
        assert_eq!(value.len(), 36);
    }

    #[test]
    fn assign_stores_id_in_extensions() {
        let mut request = Request::new(());
        let id = assign(&mut request);
        assert_eq!(request.extensions().get::<CorrelationId>(), Some(&id));
    }
}
