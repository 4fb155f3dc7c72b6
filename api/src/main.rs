//! Contributions API Server
//!
//! Proxies a GitHub account's contribution calendar for the portfolio heatmap.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::GitHubClientImpl;
use app::ContributionService;
use config::Config;
use domain::ports::GitHubClient;

/// Application state shared across all handlers
pub struct AppState<GC: GitHubClient> {
    pub contribution_service: Arc<ContributionService<GC>>,
}

// Manual impl: derive would require `GC: Clone`
impl<GC: GitHubClient> Clone for AppState<GC> {
    fn clone(&self) -> Self {
        Self {
            contribution_service: self.contribution_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn app_router<GC>(state: AppState<GC>) -> Router
where
    GC: GitHubClient + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Contribution calendar (public)
        .route(
            "/api/github-contributions",
            get(handlers::get_contributions::<GC>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,contributions_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting contributions API...");

    // Load configuration
    let config = Config::from_env();
    if config.graphql_enabled() {
        tracing::info!("GitHub token configured, using GraphQL with public calendar fallback");
    } else {
        tracing::info!("No GitHub token configured, using public calendar only");
    }

    // Create adapters and services
    let github = Arc::new(GitHubClientImpl::from_config(&config));
    let contribution_service = Arc::new(ContributionService::new(
        github,
        config.github_token.clone(),
    ));

    let app = app_router(AppState {
        contribution_service,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
