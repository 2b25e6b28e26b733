//! One-shot generation of the open issues content page.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::config;
use crate::github::{GitHubError, GraphqlClient, IssuesClient, collect_open_issues};
use crate::render;

/// Fetch all open issues and overwrite the content file with the rendered
/// page. The content file is only touched after every repository and every
/// page has been fetched successfully.
#[tokio::main]
pub async fn run() -> anyhow::Result<()> {
    let query_template = fs::read_to_string(config::QUERY_TEMPLATE_PATH)
        .with_context(|| format!("Failed to read query template {}", config::QUERY_TEMPLATE_PATH))?;
    let content_template = fs::read_to_string(config::CONTENT_TEMPLATE_PATH).with_context(|| {
        format!(
            "Failed to read content template {}",
            config::CONTENT_TEMPLATE_PATH
        )
    })?;

    let client = GraphqlClient::from_env(query_template)?;

    run_with_client(
        &client,
        &config::REPO_NAMES,
        &content_template,
        Path::new(config::CONTENT_TEMPLATE_PATH),
    )
    .await
}

/// Inner run with the client, repository list, and output path injectable
/// for tests.
async fn run_with_client(
    client: &dyn IssuesClient,
    repo_names: &[&str],
    content_template: &str,
    output_path: &Path,
) -> anyhow::Result<()> {
    let projects = collect_open_issues(client, repo_names).await?;

    let rendered = render::render_content(content_template, &projects)
        .context("Failed to render the content template")?;

    fs::write(output_path, rendered)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(path = %output_path.display(), "wrote rendered open issues page");
    Ok(())
}

/// Map a run failure to the process exit code: 1 for a non-200 API
/// response, 2 for everything else.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<GitHubError>() {
        Some(GitHubError::ApiStatus { .. }) => 1,
        _ => 2,
    }
}
