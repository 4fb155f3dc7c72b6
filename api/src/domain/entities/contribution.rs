//! Contribution calendar domain entities
//!
//! Request-scoped values describing one year of day-level activity counts,
//! plus the pure helpers both upstream sources normalize through.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Earliest year a caller may request
pub const MIN_YEAR: i32 = 2007;

/// Latest year a caller may request
pub const MAX_YEAR: i32 = 2100;

/// Year GitHub went public; the synthesized year list never predates it
pub const FIRST_PUBLIC_YEAR: i32 = 2008;

/// Number of years offered when the source can't report them
pub const FALLBACK_YEAR_WINDOW: i32 = 10;

pub const DAYS_PER_WEEK: usize = 7;

/// A single calendar day and its activity count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
    /// 0 = Sunday
    pub weekday: u8,
}

impl ContributionDay {
    /// Build a day whose weekday is derived from its date
    pub fn from_date(date: NaiveDate, contribution_count: u32) -> Self {
        Self {
            date,
            contribution_count,
            weekday: weekday_of(date),
        }
    }
}

/// Up to seven consecutive days, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

/// Canonical response shape, identical for both upstream sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsPayload {
    /// Years with activity, newest first
    pub years: Vec<i32>,
    pub total_contributions: u64,
    /// Busiest single day, used by the heatmap for intensity scaling
    pub max_contribution_count: u32,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionsPayload {
    /// Normalize a pre-grouped calendar whose total was computed upstream.
    pub fn from_weeks(
        years: Vec<i32>,
        total_contributions: u64,
        weeks: Vec<ContributionWeek>,
    ) -> Self {
        Self {
            years: normalize_years(years),
            total_contributions,
            max_contribution_count: max_contribution_count(&weeks),
            weeks,
        }
    }

    /// Normalize a flat, chronological day list. Totals are computed locally.
    pub fn from_days(years: Vec<i32>, days: Vec<ContributionDay>) -> Self {
        let total_contributions = days.iter().map(|d| u64::from(d.contribution_count)).sum();
        let weeks = chunk_into_weeks(days);

        Self {
            years: normalize_years(years),
            total_contributions,
            max_contribution_count: max_contribution_count(&weeks),
            weeks,
        }
    }

    #[cfg(test)]
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|w| w.contribution_days.iter())
    }
}

/// Datetime window sent to the GraphQL contributions query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl YearWindow {
    /// Window covering `year`. For the current year the upper bound is `now`,
    /// so future days are never reported as zero.
    ///
    /// Returns `None` only for years chrono can't represent.
    pub fn for_year(year: i32, now: DateTime<Utc>) -> Option<Self> {
        let from = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
        let year_end = Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 59).single()?;
        let to = if year == now.year() && now < year_end {
            now
        } else {
            year_end
        };

        Some(Self { from, to })
    }

    pub fn from_rfc3339(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn to_rfc3339(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

pub fn is_supported_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// UTC day of week, 0 = Sunday
pub fn weekday_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Split a chronological day list into weeks of seven; the last may be short.
pub fn chunk_into_weeks(days: Vec<ContributionDay>) -> Vec<ContributionWeek> {
    days.chunks(DAYS_PER_WEEK)
        .map(|chunk| ContributionWeek {
            contribution_days: chunk.to_vec(),
        })
        .collect()
}

pub fn max_contribution_count(weeks: &[ContributionWeek]) -> u32 {
    weeks
        .iter()
        .flat_map(|w| w.contribution_days.iter())
        .map(|d| d.contribution_count)
        .max()
        .unwrap_or(0)
}

/// Newest first, no duplicates
pub fn normalize_years(mut years: Vec<i32>) -> Vec<i32> {
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Year list offered when the source can't say which years have data:
/// `current_year` down to `max(2008, current_year - 9)`.
pub fn fallback_years(current_year: i32) -> Vec<i32> {
    let lower_bound = FIRST_PUBLIC_YEAR.max(current_year - FALLBACK_YEAR_WINDOW + 1);
    (lower_bound..=current_year).rev().collect()
}
