//! GitHub client port trait
//!
//! Defines the two upstream calls the contribution service can make.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ContributionWeek, YearWindow};
use crate::error::GitHubError;

/// `contributionsCollection` as returned by the GraphQL API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    /// Every year the account has recorded activity in, unordered
    #[serde(default)]
    pub contribution_years: Vec<i32>,
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

/// Access to GitHub's contribution data
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Run the authenticated contributions query for `username` over `window`.
    ///
    /// Fails on transport errors, non-success statuses, GraphQL-level errors,
    /// and when the response carries no collection for the user.
    async fn query_contributions(
        &self,
        token: &str,
        username: &str,
        window: &YearWindow,
    ) -> Result<ContributionsCollection, GitHubError>;

    /// Fetch the public calendar markup for `username` covering all of `year`.
    async fn fetch_calendar_markup(&self, username: &str, year: i32)
        -> Result<String, GitHubError>;
}
