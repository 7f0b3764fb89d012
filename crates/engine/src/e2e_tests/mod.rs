//! Backend E2E integration tests.
//!
//! These tests run the MongoDB adapter and the full HTTP stack against a real
//! MongoDB server started through testcontainers.
//!
//! # Running E2E Tests
//!
//! ```bash
//! # Run all E2E tests (requires Docker)
//! cargo test -p pokedex-engine --lib e2e_tests -- --ignored --test-threads=1
//! ```

mod mongo_test_harness;

pub use mongo_test_harness::*;
