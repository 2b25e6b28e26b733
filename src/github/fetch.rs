//! Paginated fetch-and-aggregate for open issues.

use tracing::info;

use super::client::IssuesClient;
use super::models::{Cursor, Issue, Project};
use super::{GitHubError, Result};
use crate::config;

/// Collect every open issue for each repository in `repo_names`.
///
/// Repositories appear in the result in input order; within a repository,
/// issues appear in the order the API returned them across pages. Any
/// fetch error aborts the whole collection.
pub async fn collect_open_issues(
    client: &dyn IssuesClient,
    repo_names: &[&str],
) -> Result<Vec<Project>> {
    let mut projects = Vec::with_capacity(repo_names.len());

    for repo_name in repo_names {
        let issues = fetch_all_pages(client, repo_name).await?;
        info!(repo = repo_name, count = issues.len(), "collected open issues");
        projects.push(Project {
            name: (*repo_name).to_string(),
            issues,
        });
    }

    Ok(projects)
}

/// Follow pagination cursors until the API reports no further pages.
///
/// Bounded at `MAX_PAGES_PER_REPO` so a misbehaving API cannot keep the
/// run alive forever.
async fn fetch_all_pages(client: &dyn IssuesClient, repo_name: &str) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();
    let mut cursor = Cursor::Start;

    for _ in 0..config::MAX_PAGES_PER_REPO {
        let page = client.fetch_issues_page(repo_name, &cursor).await?;
        issues.extend(page.issues);

        match page.next {
            Some(next) => cursor = next,
            None => return Ok(issues),
        }
    }

    Err(GitHubError::PageLimitExceeded {
        repo: repo_name.to_string(),
        limit: config::MAX_PAGES_PER_REPO,
    })
}
