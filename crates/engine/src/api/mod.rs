//! API layer - HTTP entry points.

pub mod error;
pub mod extractors;
pub mod http;

pub use error::ApiError;
pub use http::{router, routes};
