//! Request payloads accepted by the HTTP API.
//!
//! Every payload derives [`validator::Validate`]; the engine rejects a payload
//! that fails validation before any use case runs. Unknown fields are denied
//! at deserialization time.

mod pagination;
mod pokemon;

pub use pagination::PaginationQuery;
pub use pokemon::{CreatePokemonRequest, UpdatePokemonRequest};
