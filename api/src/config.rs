use std::env;

/// Accepted names for the GitHub credential, in precedence order
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GITHUB_READ_TOKEN"];

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// GitHub token enabling the GraphQL source. Absent means scrape only.
    pub github_token: Option<String>,
    pub github_graphql_url: String,
    /// Base URL of the public site serving `/users/{name}/contributions`
    pub github_web_url: String,
    /// User-Agent sent on every outbound request (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            github_token: resolve_token(&lookup),
            github_graphql_url: lookup("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|| "https://api.github.com/graphql".to_string()),
            github_web_url: lookup("GITHUB_WEB_URL")
                .unwrap_or_else(|| "https://github.com".to_string()),
            user_agent: lookup("GITHUB_USER_AGENT")
                .unwrap_or_else(|| "portfolio-contributions-api".to_string()),
        }
    }

    /// Check if the GraphQL source is configured
    pub fn graphql_enabled(&self) -> bool {
        self.github_token.is_some()
    }
}

/// First non-empty value among [`TOKEN_VARS`].
pub fn resolve_token<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_VARS
        .iter()
        .filter_map(|&key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
