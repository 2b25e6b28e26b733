//! Issue data model and the GraphQL response shape it is built from.

use serde::{Deserialize, Serialize};

/// One open issue, ready for the content template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub title: String,
    pub url: String,
    pub labels: Vec<String>,
}

impl Issue {
    /// Build an `Issue` from a GraphQL issue node.
    ///
    /// Backticks in titles are escaped so they cannot break the markdown
    /// produced by the content template. The URL is copied verbatim and
    /// labels keep the order the API returned them in.
    fn from_node(node: IssueNode) -> Self {
        Self {
            title: node.title.replace('`', "\\`"),
            url: node.url,
            labels: node.labels.nodes.into_iter().map(|l| l.name).collect(),
        }
    }
}

/// All open issues for one repository, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub issues: Vec<Issue>,
}

/// Pagination position within a repository's issue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Before the first page.
    Start,
    /// After the page that ended with this token.
    After(String),
}

impl Cursor {
    /// The literal spliced into the query template: `null` for the first
    /// call, the end cursor quoted as a GraphQL string afterwards.
    pub fn as_graphql(&self) -> String {
        match self {
            Self::Start => "null".to_string(),
            Self::After(token) => format!("\"{token}\""),
        }
    }
}

/// One page of issues, plus the cursor to continue from if the API
/// reported another page.
#[derive(Debug, Clone)]
pub struct IssuesPage {
    pub issues: Vec<Issue>,
    pub next: Option<Cursor>,
}

impl IssuesPage {
    pub(crate) fn from_connection(connection: IssueConnection) -> Self {
        let issues = connection.nodes.into_iter().map(Issue::from_node).collect();
        let next = if connection.page_info.has_next_page {
            connection.page_info.end_cursor.map(Cursor::After)
        } else {
            None
        };
        Self { issues, next }
    }
}

// Response shape: data.organization.repository.issues.{nodes,pageInfo}.

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    pub data: Option<GraphQlData>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlData {
    pub organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Organization {
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Repository {
    pub issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssueConnection {
    pub page_info: PageInfo,
    pub nodes: Vec<IssueNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueNode {
    pub title: String,
    pub url: String,
    pub labels: LabelConnection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelConnection {
    pub nodes: Vec<LabelNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelNode {
    pub name: String,
}
