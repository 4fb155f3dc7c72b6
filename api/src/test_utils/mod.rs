//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mock GitHub client records every upstream call so tests can assert
//! which sources were tried, and that invalid input never reaches the network.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
