//! Fixed build-time configuration.
//!
//! This tool runs from the website repository root in CI; everything it
//! needs is compiled in. There is no runtime configuration surface beyond
//! the `GITHUB_TOKEN` environment variable.

use std::time::Duration;

/// These are the only repositories that get queried; the rendered page
/// lists them in this order.
pub const REPO_NAMES: [&str; 4] = ["beeware", "beeware.github.io", "briefcase", "toga"];

/// GitHub GraphQL API endpoint.
pub const GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Template for the per-repository issues query.
pub const QUERY_TEMPLATE_PATH: &str = "content/contributing/open-issues/issues_query.txt";

/// Lektor content file; also the render target, overwritten in place.
pub const CONTENT_TEMPLATE_PATH: &str = "content/contributing/open-issues/contents.lr";

/// Environment variable holding the bearer token for API calls.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on pages fetched per repository. Each page holds up to 100
/// issues, so hitting this means the API is misbehaving, not that a
/// repository legitimately has 5000 open issues.
pub const MAX_PAGES_PER_REPO: usize = 50;
