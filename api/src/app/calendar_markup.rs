//! Public calendar markup parser
//!
//! Extracts day-level counts from the HTML/SVG contribution calendar by
//! pattern-matching `<rect class="ContributionCalendar-day" ...>` markers.
//! Nothing here touches the network.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::entities::ContributionDay;
use crate::error::GitHubError;

fn day_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<rect[^>]*ContributionCalendar-day[^>]*>").unwrap())
}

fn date_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)data-date="([^"]*)""#).unwrap())
}

fn count_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)data-count="([^"]*)""#).unwrap())
}

fn first_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").unwrap())
}

/// Value of the first match of `attribute` in `tag`, or `""`
fn read_attribute<'a>(tag: &'a str, attribute: &Regex) -> &'a str {
    attribute
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// First run of digits in free text such as `"12 contributions on ..."`.
/// Text without digits ("No contributions") counts as zero; runs too large
/// for `u32` saturate.
pub fn parse_contribution_count(raw: &str) -> u32 {
    first_digits()
        .find(raw)
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Parse one marker tag. Markers without a valid ISO date are dropped.
fn parse_day_marker(tag: &str) -> Option<ContributionDay> {
    let date = NaiveDate::parse_from_str(read_attribute(tag, date_attribute()), "%Y-%m-%d").ok()?;
    let count = parse_contribution_count(read_attribute(tag, count_attribute()));

    Some(ContributionDay::from_date(date, count))
}

/// Extract every calendar day from `markup`, in document order.
pub fn parse_calendar_markup(markup: &str) -> Result<Vec<ContributionDay>, GitHubError> {
    let markers: Vec<&str> = day_marker().find_iter(markup).map(|m| m.as_str()).collect();
    if markers.is_empty() {
        return Err(GitHubError::Unparsable);
    }

    let days: Vec<ContributionDay> = markers.into_iter().filter_map(parse_day_marker).collect();
    if days.is_empty() {
        return Err(GitHubError::NoDays);
    }

    Ok(days)
}
