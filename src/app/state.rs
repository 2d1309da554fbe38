use crate::app::actions::{RequestId, SideEffect};
use crate::github::FetchError;
use crate::github::models::{Issue, IssueFilter, IssueQuery, Pagination, RateLimit, RepoId, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
pub struct AppState {
    // Data
    pub repo_id: RepoId,
    pub repository: Option<Repository>,
    pub issues: Vec<Issue>,
    pub rate_limit: RateLimit,
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,

    // Query
    pub filter: IssueFilter,
    pub pagination: Pagination,
    pub latest_request: RequestId,
    /// Query whose result is currently in `issues`.
    pub shown_query: Option<IssueQuery>,

    // Selection
    pub cursor: usize,

    // UI flags
    pub loading: bool,
    pub error: Option<FetchError>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(repo_id: RepoId) -> Self {
        Self {
            repo_id,
            repository: None,
            issues: Vec::new(),
            rate_limit: RateLimit::default(),
            last_refresh: None,
            filter: IssueFilter::default(),
            pagination: Pagination::default(),
            latest_request: 0,
            shown_query: None,
            cursor: 0,
            loading: true,
            error: None,
            should_quit: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.repository.is_none() {
            Phase::Failed
        } else {
            Phase::Ready
        }
    }

    pub fn query(&self) -> IssueQuery {
        IssueQuery::new(self.filter, self.pagination)
    }

    fn next_request(&mut self) -> RequestId {
        self.latest_request += 1;
        self.latest_request
    }

    /// The list on screen belongs to an older query than the current page/filter.
    pub fn showing_previous_query(&self) -> bool {
        self.shown_query.is_some_and(|q| q != self.query())
    }

    pub fn is_current(&self, request: RequestId) -> bool {
        request == self.latest_request
    }

    /// Start the initial load: repository metadata and the first issue page, joined.
    pub fn initialize(&mut self) -> SideEffect {
        self.loading = true;
        self.error = None;
        let request = self.next_request();
        SideEffect::LoadInitial {
            repo: self.repo_id.clone(),
            query: self.query(),
            request,
        }
    }

    /// Fetch issues for the current query. Supersedes any fetch still in flight.
    pub fn reload_issues(&mut self) -> SideEffect {
        let request = self.next_request();
        SideEffect::FetchIssues {
            repo: self.repo_id.clone(),
            query: self.query(),
            request,
        }
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.issues.get(self.cursor)
    }

    pub fn selected_issue_url(&self) -> Option<String> {
        self.selected_issue().map(|issue| issue.html_url.clone())
    }

    pub fn repository_url(&self) -> String {
        self.repository
            .as_ref()
            .and_then(|r| r.html_url.clone())
            .unwrap_or_else(|| self.repo_id.html_url())
    }

    pub fn selected_avatar_url(&self) -> Option<String> {
        match self.selected_issue() {
            Some(issue) => Some(issue.user.avatar_url.clone()),
            None => self
                .repository
                .as_ref()
                .map(|r| r.owner.avatar_url.clone()),
        }
    }
}
