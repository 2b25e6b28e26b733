//! Jinja-compatible rendering of the query and content templates.
//!
//! Both templates ship with the website content; the query template is
//! re-rendered for every page fetch, the content template once per run.

use minijinja::{AutoEscape, Environment, context};

use crate::github::{Cursor, Project};

/// Render the GraphQL query template for one page fetch.
///
/// `after_cursor` is spliced in as a literal: `null` on the first call,
/// the quoted end cursor afterwards.
pub fn render_query(
    template: &str,
    repo_name: &str,
    cursor: &Cursor,
) -> Result<String, minijinja::Error> {
    plain_env().render_str(
        template,
        context! {
            repo_name => repo_name,
            after_cursor => cursor.as_graphql(),
        },
    )
}

/// Render the content template with the collected per-repository issues.
pub fn render_content(template: &str, projects: &[Project]) -> Result<String, minijinja::Error> {
    plain_env().render_str(template, context! { projects => projects })
}

/// Auto-escaping is disabled: the templates produce GraphQL text and
/// Lektor markdown, not HTML.
fn plain_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}
