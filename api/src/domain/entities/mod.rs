//! Domain entities
//!
//! Pure domain models for the contribution calendar.

pub mod contribution;

pub use contribution::{
    fallback_years, is_supported_year, ContributionDay, ContributionWeek, ContributionsPayload,
    YearWindow,
};
