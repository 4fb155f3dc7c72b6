//! Domain layer
//!
//! Contains pure contribution-calendar logic with no I/O.
//! - `entities`: The canonical payload and its normalization helpers
//! - `ports`: Trait definitions for the upstream data sources

pub mod entities;
pub mod ports;
