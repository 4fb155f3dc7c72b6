//! Contribution service
//!
//! Produces a year of contribution data for one GitHub account.
//! The authenticated GraphQL source is tried first when a token is configured;
//! the public calendar markup is the fallback and the only source otherwise.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};

use crate::app::calendar_markup::parse_calendar_markup;
use crate::domain::entities::{fallback_years, is_supported_year, ContributionsPayload, YearWindow};
use crate::domain::ports::{ContributionsCollection, GitHubClient};
use crate::error::{AppError, GitHubError};

pub const MISSING_USERNAME: &str = "Missing username.";
pub const INVALID_YEAR: &str = "Invalid year.";

/// Normalize a GraphQL collection. The upstream total is kept as-is.
pub fn payload_from_collection(collection: ContributionsCollection) -> ContributionsPayload {
    ContributionsPayload::from_weeks(
        collection.contribution_years,
        collection.contribution_calendar.total_contributions,
        collection.contribution_calendar.weeks,
    )
}

/// Normalize scraped calendar markup. Years are synthesized from `now`
/// since the markup doesn't list them.
pub fn payload_from_markup(
    markup: &str,
    now: DateTime<Utc>,
) -> Result<ContributionsPayload, GitHubError> {
    let days = parse_calendar_markup(markup)?;

    Ok(ContributionsPayload::from_days(
        fallback_years(now.year()),
        days,
    ))
}

/// Service for fetching contribution calendars
pub struct ContributionService<GC>
where
    GC: GitHubClient,
{
    github: Arc<GC>,
    token: Option<String>,
}

impl<GC> ContributionService<GC>
where
    GC: GitHubClient,
{
    /// `token` enables the GraphQL source; `None` means scrape only.
    pub fn new(github: Arc<GC>, token: Option<String>) -> Self {
        Self { github, token }
    }

    pub async fn get_contributions(
        &self,
        username: &str,
        year: i32,
    ) -> Result<ContributionsPayload, AppError> {
        self.get_contributions_at(username, year, Utc::now()).await
    }

    /// Same as [`get_contributions`](Self::get_contributions) with an explicit clock.
    pub async fn get_contributions_at(
        &self,
        username: &str,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<ContributionsPayload, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::BadRequest(MISSING_USERNAME.to_string()));
        }
        let window = is_supported_year(year)
            .then(|| YearWindow::for_year(year, now))
            .flatten()
            .ok_or_else(|| AppError::BadRequest(INVALID_YEAR.to_string()))?;

        let structured_error = match self.token.as_deref() {
            Some(token) => match self.fetch_structured(token, username, &window).await {
                Ok(payload) => return Ok(payload),
                Err(e) => {
                    tracing::warn!(
                        "GraphQL contributions failed for {} ({}), falling back to public calendar: {}",
                        username,
                        year,
                        e
                    );
                    Some(e)
                }
            },
            None => None,
        };

        match self.fetch_scraped(username, year, now).await {
            Ok(payload) => Ok(payload),
            Err(scrape_error) => Err(AppError::source_unavailable(
                structured_error,
                Some(scrape_error),
            )),
        }
    }

    async fn fetch_structured(
        &self,
        token: &str,
        username: &str,
        window: &YearWindow,
    ) -> Result<ContributionsPayload, GitHubError> {
        tracing::debug!(
            "Querying GraphQL contributions for {} from {} to {}",
            username,
            window.from_rfc3339(),
            window.to_rfc3339()
        );

        let collection = self
            .github
            .query_contributions(token, username, window)
            .await?;

        Ok(payload_from_collection(collection))
    }

    async fn fetch_scraped(
        &self,
        username: &str,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<ContributionsPayload, GitHubError> {
        tracing::debug!("Fetching public contribution calendar for {} ({})", username, year);

        let markup = self.github.fetch_calendar_markup(username, year).await?;

        payload_from_markup(&markup, now)
    }
}
