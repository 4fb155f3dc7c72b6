//! Unified error types for the contributions API
//!
//! This module defines error types for each layer:
//! - `GitHubError`: failures of a single upstream source
//! - `AppError`: Application layer errors (rendered as HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message used when neither source produced a diagnostic
pub const SOURCE_UNAVAILABLE: &str = "Unable to fetch GitHub contributions right now.";

/// GitHub client errors
///
/// The `Display` text of a scrape-path error is what callers see in the
/// 502 body, so messages are written for end users.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub GraphQL request failed (status {status}).")]
    GraphQlStatus { status: u16 },

    #[error("GitHub public contributions endpoint failed (status {status}).")]
    CalendarStatus { status: u16 },

    #[error("{0}")]
    GraphQl(String),

    #[error("GitHub contributions unavailable for user {0}.")]
    UserNotFound(String),

    #[error("Unexpected response from GitHub: {0}")]
    Deserialization(String),

    #[error("Unable to parse public contribution data.")]
    Unparsable,

    #[error("No contribution days returned for this year.")]
    NoDays,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Every attempted source failed. `message` is the most specific
    /// diagnostic; `structured_cause` keeps the GraphQL failure for logs.
    #[error("{message}")]
    SourceUnavailable {
        message: String,
        structured_cause: Option<String>,
    },
}

impl AppError {
    /// Apply the message precedence: scrape error, then structured error,
    /// then a generic message.
    pub fn source_unavailable(
        structured: Option<GitHubError>,
        scrape: Option<GitHubError>,
    ) -> Self {
        let structured_cause = structured.map(|e| e.to_string());
        let message = scrape
            .map(|e| e.to_string())
            .or_else(|| structured_cause.clone())
            .unwrap_or_else(|| SOURCE_UNAVAILABLE.to_string());

        AppError::SourceUnavailable {
            message,
            structured_cause,
        }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::SourceUnavailable {
                message,
                structured_cause,
            } => {
                match &structured_cause {
                    Some(cause) => tracing::error!(
                        "GitHub contributions unavailable: {} (GraphQL: {})",
                        message,
                        cause
                    ),
                    None => tracing::error!("GitHub contributions unavailable: {}", message),
                }
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: AppError) -> (String, Option<String>) {
        match err {
            AppError::SourceUnavailable {
                message,
                structured_cause,
            } => (message, structured_cause),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn scrape_message_wins_over_structured() {
        let (message, cause) = message_of(AppError::source_unavailable(
            Some(GitHubError::GraphQl("Bad credentials".to_string())),
            Some(GitHubError::Unparsable),
        ));

        assert_eq!(message, "Unable to parse public contribution data.");
        assert_eq!(cause.as_deref(), Some("Bad credentials"));
    }

    #[test]
    fn structured_message_used_without_scrape_error() {
        let (message, _) = message_of(AppError::source_unavailable(
            Some(GitHubError::GraphQlStatus { status: 500 }),
            None,
        ));

        assert_eq!(message, "GitHub GraphQL request failed (status 500).");
    }

    #[test]
    fn generic_message_without_any_error() {
        let (message, cause) = message_of(AppError::source_unavailable(None, None));

        assert_eq!(message, SOURCE_UNAVAILABLE);
        assert!(cause.is_none());
    }

    #[test]
    fn status_codes() {
        let bad = AppError::BadRequest("Invalid year.".to_string()).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::source_unavailable(None, Some(GitHubError::NoDays)).into_response();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }
}
