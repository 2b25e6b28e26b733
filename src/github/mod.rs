//! Fetching open issues from the GitHub GraphQL API.

mod client;
mod fetch;
mod models;

use thiserror::Error;

pub use client::{GraphqlClient, IssuesClient};
pub use fetch::collect_open_issues;
pub use models::{Cursor, Issue, IssuesPage, Project};

#[cfg(test)]
pub use client::mock::MockIssuesClient;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to get GitHub token: {0}")]
    TokenError(String),

    #[error("GitHub API returned HTTP {status}")]
    ApiStatus { status: reqwest::StatusCode },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL API error: {0}")]
    GraphQLError(String),

    #[error("No issue data in response for repository {0}")]
    MissingRepository(String),

    #[error("Failed to render issues query: {0}")]
    QueryRender(#[from] minijinja::Error),

    #[error("Pagination for repository {repo} exceeded {limit} pages")]
    PageLimitExceeded { repo: String, limit: usize },
}

pub type Result<T> = std::result::Result<T, GitHubError>;
