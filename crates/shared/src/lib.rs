//! Pokedex Protocol - Wire contracts of the HTTP API
//!
//! This crate contains the request and response bodies exchanged with clients:
//! - Request DTOs with their validation rules
//! - Response DTOs and the error body
//! - Conversions between wire and domain types
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, validator, and the domain crate
//! 2. **No business logic** - Pure data types, validation rules, and conversions

pub mod requests;
pub mod responses;

pub use requests::{CreatePokemonRequest, PaginationQuery, UpdatePokemonRequest};
pub use responses::{ErrorResponse, PokemonResponse};
