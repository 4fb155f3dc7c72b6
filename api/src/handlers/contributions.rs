//! Contribution calendar handler
//!
//! `GET /api/github-contributions?username=<login>&year=<yyyy>`

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Datelike, Utc};

use crate::app::{INVALID_YEAR, MISSING_USERNAME};
use crate::domain::entities::is_supported_year;
use crate::domain::ports::GitHubClient;
use crate::error::AppError;
use crate::AppState;

/// Shared caches may serve a payload for a day, then stale for 12 more hours
pub const CACHE_CONTROL: &str = "s-maxage=86400, stale-while-revalidate=43200";

/// Query parameters of the contributions endpoint.
///
/// Read from raw key/value pairs so bad or repeated input gets our own 400
/// body instead of the extractor's rejection. The first occurrence of a key wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ContributionsParams {
    pub username: Option<String>,
    pub year: Option<String>,
}

impl ContributionsParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut params.username,
                "year" => &mut params.year,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Requested year, defaulting to the current UTC year when absent or blank.
pub fn parse_year(raw: Option<&str>, now: DateTime<Utc>) -> Result<i32, AppError> {
    let year = match raw.map(str::trim).filter(|y| !y.is_empty()) {
        None => now.year(),
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(INVALID_YEAR.to_string()))?,
    };

    if !is_supported_year(year) {
        return Err(AppError::BadRequest(INVALID_YEAR.to_string()));
    }

    Ok(year)
}

/// GET /api/github-contributions
pub async fn get_contributions<GC>(
    State(state): State<AppState<GC>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError>
where
    GC: GitHubClient + 'static,
{
    let params = ContributionsParams::from_pairs(pairs);
    let username = params
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_USERNAME.to_string()))?;
    let year = parse_year(params.year.as_deref(), Utc::now())?;

    let payload = state
        .contribution_service
        .get_contributions(username, year)
        .await?;

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(payload)).into_response())
}
