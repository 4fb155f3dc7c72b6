//! Test fixtures
//!
//! Factory functions for upstream responses with known totals.

use chrono::NaiveDate;

use crate::domain::entities::{ContributionDay, ContributionWeek};
use crate::domain::ports::github::{ContributionCalendar, ContributionsCollection};

fn week(start: &str, counts: &[u32]) -> ContributionWeek {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    ContributionWeek {
        contribution_days: counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                ContributionDay::from_date(start + chrono::Duration::days(i as i64), count)
            })
            .collect(),
    }
}

/// Three weeks of January 2024: 42 contributions, busiest day 9.
/// Years are deliberately unsorted.
pub fn test_collection() -> ContributionsCollection {
    ContributionsCollection {
        contribution_years: vec![2022, 2024, 2023],
        contribution_calendar: ContributionCalendar {
            total_contributions: 42,
            weeks: vec![
                week("2024-01-01", &[9, 3, 0, 2, 1, 5]),
                week("2024-01-07", &[4, 4, 0, 0, 2, 1, 1]),
                week("2024-01-14", &[3, 2, 5]),
            ],
        },
    }
}

/// Public calendar SVG with one marker per `(date, count)`
pub fn calendar_markup(days: &[(&str, u32)]) -> String {
    let rects: String = days
        .iter()
        .enumerate()
        .map(|(i, (date, count))| {
            let label = if *count == 0 {
                "No contributions".to_string()
            } else {
                format!("{} contributions on {}", count, date)
            };
            format!(
                r#"<rect width="11" height="11" x="{}" y="{}" class="ContributionCalendar-day" data-date="{}" data-count="{}" data-level="1" rx="2" ry="2"></rect>"#,
                (i / 7) * 14,
                (i % 7) * 13,
                date,
                label
            )
        })
        .collect();

    format!(
        r#"<svg width="717" height="112" class="js-calendar-graph-svg"><g transform="translate(10, 20)">{}</g></svg>"#,
        rects
    )
}
