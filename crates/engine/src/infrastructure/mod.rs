//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod correlation;
pub mod memory;
pub mod mongo;
pub mod pokeapi;
pub mod ports;
