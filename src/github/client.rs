//! Client trait and GraphQL HTTP implementation.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::models::{Cursor, GraphQlResponse, IssuesPage};
use super::{GitHubError, Result};
use crate::config;
use crate::render;

/// Trait for fetching pages of open issues.
#[async_trait]
pub trait IssuesClient: Send + Sync {
    /// Fetch one page of open issues for `repo_name`, starting after
    /// `cursor`.
    async fn fetch_issues_page(&self, repo_name: &str, cursor: &Cursor) -> Result<IssuesPage>;
}

/// Production implementation backed by the GitHub GraphQL endpoint.
#[derive(Debug)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    query_template: String,
}

impl GraphqlClient {
    /// Create a client for `endpoint` with an explicit bearer token.
    /// Tests point this at a mock server; production code uses
    /// [`GraphqlClient::from_env`].
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        query_template: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
            query_template: query_template.into(),
        })
    }

    /// Create a client for the real GitHub endpoint, reading the bearer
    /// token from the environment.
    pub fn from_env(query_template: impl Into<String>) -> Result<Self> {
        let token = std::env::var(config::TOKEN_ENV_VAR)
            .map_err(|_| GitHubError::TokenError(format!("{} is not set", config::TOKEN_ENV_VAR)))?;

        Self::new(config::GRAPHQL_URL, token, query_template)
    }
}

#[async_trait]
impl IssuesClient for GraphqlClient {
    async fn fetch_issues_page(&self, repo_name: &str, cursor: &Cursor) -> Result<IssuesPage> {
        let query = render::render_query(&self.query_template, repo_name, cursor)?;

        debug!(repo = repo_name, cursor = %cursor.as_graphql(), "querying GitHub GraphQL API");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query }))
            .send()
            .await?;

        // Any non-200 status aborts the whole run; no retry, no partial
        // output.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(GitHubError::ApiStatus { status });
        }

        let body: GraphQlResponse = response.json().await?;

        if let Some(errors) = body.errors {
            let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(GitHubError::GraphQLError(messages.join(", ")));
        }

        let issues = body
            .data
            .and_then(|d| d.organization)
            .and_then(|o| o.repository)
            .map(|r| r.issues)
            .ok_or_else(|| GitHubError::MissingRepository(repo_name.to_string()))?;

        Ok(IssuesPage::from_connection(issues))
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use super::*;

    /// Mock implementation serving scripted pages per repository.
    #[derive(Default)]
    pub struct MockIssuesClient {
        /// Pages to serve, consumed in call order per repository.
        pages: Mutex<HashMap<String, VecDeque<Result<IssuesPage>>>>,
        /// `(repo, cursor literal)` for each call, for assertions.
        pub calls: Mutex<Vec<(String, String)>>,
    }

    impl MockIssuesClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_page(self, repo_name: &str, page: IssuesPage) -> Self {
            self.pages
                .lock()
                .unwrap()
                .entry(repo_name.to_string())
                .or_default()
                .push_back(Ok(page));
            self
        }

        pub fn with_error(self, repo_name: &str, error: GitHubError) -> Self {
            self.pages
                .lock()
                .unwrap()
                .entry(repo_name.to_string())
                .or_default()
                .push_back(Err(error));
            self
        }

        /// Cursor literals observed across all calls, in order.
        pub fn cursors_seen(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(_, cursor)| cursor.clone())
                .collect()
        }
    }

    #[async_trait]
    impl IssuesClient for MockIssuesClient {
        async fn fetch_issues_page(&self, repo_name: &str, cursor: &Cursor) -> Result<IssuesPage> {
            self.calls
                .lock()
                .unwrap()
                .push((repo_name.to_string(), cursor.as_graphql()));

            self.pages
                .lock()
                .unwrap()
                .get_mut(repo_name)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| Err(GitHubError::MissingRepository(repo_name.to_string())))
        }
    }
}
