//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contributions;

pub use contributions::get_contributions;
