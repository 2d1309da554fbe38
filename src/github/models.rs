use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of issues requested per page.
pub const PAGE_SIZE: u32 = 5;

/// Owner/name pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub fn repo_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.name)
    }

    pub fn issues_path(&self) -> String {
        format!("/repos/{}/{}/issues", self.owner, self.name)
    }

    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid repository '{0}', expected OWNER/NAME")]
pub struct ParseRepoIdError(pub String);

impl FromStr for RepoId {
    type Err = ParseRepoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Route parameters arrive with the slash percent-encoded
        let decoded = s.trim().replace("%2F", "/").replace("%2f", "/");
        let mut parts = decoded.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if is_valid_segment(owner) && is_valid_segment(name) => {
                Ok(RepoId::new(owner, name))
            }
            _ => Err(ParseRepoIdError(s.to_string())),
        }
    }
}

/// Owner and repository names go into the request path verbatim.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    #[serde(default)]
    pub number: Option<u64>,
    pub title: String,
    pub html_url: String,
    pub user: User,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Issue status constraint sent as the `state` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl IssueFilter {
    pub const ALL: [IssueFilter; 3] = [IssueFilter::All, IssueFilter::Open, IssueFilter::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueFilter::All => "all",
            IssueFilter::Open => "open",
            IssueFilter::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueFilter::All => "All",
            IssueFilter::Open => "Open",
            IssueFilter::Closed => "Closed",
        }
    }

    pub fn cycle(&self) -> IssueFilter {
        match self {
            IssueFilter::All => IssueFilter::Open,
            IssueFilter::Open => IssueFilter::Closed,
            IssueFilter::Closed => IssueFilter::All,
        }
    }
}

impl fmt::Display for IssueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }
}

/// The (filter, page, limit) triple that selects one slice of issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueQuery {
    pub filter: IssueFilter,
    pub pagination: Pagination,
}

impl IssueQuery {
    pub fn new(filter: IssueFilter, pagination: Pagination) -> Self {
        Self { filter, pagination }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state", self.filter.as_str().to_string()),
            ("per_page", self.pagination.limit.to_string()),
            ("page", self.pagination.page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RateLimit {
    pub remaining: u32,
    pub limit: u32,
    pub reset_at: Option<DateTime<Utc>>,
}
