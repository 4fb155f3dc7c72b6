//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client};
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::YearWindow;
use crate::domain::ports::{ContributionsCollection, GitHubClient};
use crate::error::GitHubError;

const CONTRIBUTIONS_QUERY: &str = r#"
  query ContributionsByYear($username: String!, $from: DateTime!, $to: DateTime!) {
    user(login: $username) {
      contributionsCollection(from: $from, to: $to) {
        contributionYears
        contributionCalendar {
          totalContributions
          weeks {
            contributionDays {
              contributionCount
              date
              weekday
            }
          }
        }
      }
    }
  }
"#;

/// Implementation of the GitHub client over HTTP
pub struct GitHubClientImpl {
    http: Client,
    graphql_url: String,
    web_base_url: String,
    user_agent: String,
}

impl GitHubClientImpl {
    pub fn new(graphql_url: String, web_base_url: String, user_agent: String) -> Self {
        Self {
            http: Client::new(),
            graphql_url,
            web_base_url: web_base_url.trim_end_matches('/').to_string(),
            user_agent,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.github_graphql_url.clone(),
            config.github_web_url.clone(),
            config.user_agent.clone(),
        )
    }

    fn calendar_url(&self, username: &str, year: i32) -> String {
        format!(
            "{}/users/{}/contributions?from={}-01-01&to={}-12-31",
            self.web_base_url,
            encode(username),
            year,
            year
        )
    }
}

/// Request types for the GraphQL API
#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: ContributionsVariables<'a>,
}

#[derive(Serialize)]
struct ContributionsVariables<'a> {
    username: &'a str,
    from: String,
    to: String,
}

/// Response types from the GraphQL API
#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Deserialize)]
struct GraphQlData {
    user: Option<GraphQlUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlUser {
    contributions_collection: Option<ContributionsCollection>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    #[serde(default)]
    message: String,
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn query_contributions(
        &self,
        token: &str,
        username: &str,
        window: &YearWindow,
    ) -> Result<ContributionsCollection, GitHubError> {
        let request = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: ContributionsVariables {
                username,
                from: window.from_rfc3339(),
                to: window.to_rfc3339(),
            },
        };

        let response = self
            .http
            .post(&self.graphql_url)
            .bearer_auth(token)
            .header(USER_AGENT, &self.user_agent)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::GraphQlStatus {
                status: status.as_u16(),
            });
        }

        let payload: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| GitHubError::Deserialization(e.to_string()))?;

        if let Some(first) = payload.errors.into_iter().next() {
            let message = if first.message.is_empty() {
                "GitHub GraphQL error.".to_string()
            } else {
                first.message
            };
            return Err(GitHubError::GraphQl(message));
        }

        payload
            .data
            .and_then(|d| d.user)
            .and_then(|u| u.contributions_collection)
            .ok_or_else(|| GitHubError::UserNotFound(username.to_string()))
    }

    async fn fetch_calendar_markup(
        &self,
        username: &str,
        year: i32,
    ) -> Result<String, GitHubError> {
        let response = self
            .http
            .get(self.calendar_url(username, year))
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::CalendarStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
