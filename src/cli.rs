use clap::Parser;

/// Regenerate the open issues page from the GitHub GraphQL API.
///
/// The repository list and template paths are fixed at build time; the
/// only runtime input is the GITHUB_TOKEN environment variable.
#[derive(Parser)]
#[command(name = "open-issues", version, about)]
pub struct Cli {}
