//! Mock implementations of port traits
//!
//! In-memory GitHub client that can be configured per test.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::YearWindow;
use crate::domain::ports::{ContributionsCollection, GitHubClient};
use crate::error::GitHubError;

/// An upstream call observed by [`MockGitHubClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamCall {
    Query {
        token: String,
        username: String,
        from: String,
        to: String,
    },
    Markup {
        username: String,
        year: i32,
    },
}

// ============================================================================
// Mock GitHub Client
// ============================================================================

/// Without configuration the query reports a missing user and the
/// calendar endpoint answers 503.
#[derive(Default)]
pub struct MockGitHubClient {
    collection: Arc<RwLock<Option<ContributionsCollection>>>,
    graphql_error: Arc<RwLock<Option<String>>>,
    markup: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<UpstreamCall>>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the GraphQL query to succeed
    pub fn with_collection(self, collection: ContributionsCollection) -> Self {
        *self.collection.write().unwrap() = Some(collection);
        self
    }

    /// Configure the GraphQL query to report an API-level error
    pub fn with_graphql_error(self, message: &str) -> Self {
        *self.graphql_error.write().unwrap() = Some(message.to_string());
        self
    }

    /// Configure the public calendar to return `markup`
    pub fn with_markup(self, markup: &str) -> Self {
        *self.markup.write().unwrap() = Some(markup.to_string());
        self
    }

    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn query_contributions(
        &self,
        token: &str,
        username: &str,
        window: &YearWindow,
    ) -> Result<ContributionsCollection, GitHubError> {
        self.calls.write().unwrap().push(UpstreamCall::Query {
            token: token.to_string(),
            username: username.to_string(),
            from: window.from_rfc3339(),
            to: window.to_rfc3339(),
        });

        if let Some(message) = self.graphql_error.read().unwrap().clone() {
            return Err(GitHubError::GraphQl(message));
        }

        self.collection
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| GitHubError::UserNotFound(username.to_string()))
    }

    async fn fetch_calendar_markup(
        &self,
        username: &str,
        year: i32,
    ) -> Result<String, GitHubError> {
        self.calls.write().unwrap().push(UpstreamCall::Markup {
            username: username.to_string(),
            year,
        });

        self.markup
            .read()
            .unwrap()
            .clone()
            .ok_or(GitHubError::CalendarStatus { status: 503 })
    }
}
