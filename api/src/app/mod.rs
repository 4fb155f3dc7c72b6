//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod calendar_markup;
pub mod contribution_service;

pub use contribution_service::{ContributionService, INVALID_YEAR, MISSING_USERNAME};
