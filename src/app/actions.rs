use crate::github::models::{Issue, IssueFilter, IssueQuery, RateLimit, RepoId, Repository};
use crate::github::FetchError;

/// Monotonic tag attached to every issued fetch.
pub type RequestId = u64;

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    NextPage,
    PreviousPage,
    SetFilter(IssueFilter),
    CycleFilter,
    Refresh,
    OpenInBrowser,
    OpenAvatar,
    Back,
    DataLoaded {
        request: RequestId,
        payload: DataPayload,
    },
    LoadError {
        request: RequestId,
        error: FetchError,
    },
    DismissError,
    Quit,
}

#[derive(Debug)]
pub enum DataPayload {
    Initial {
        repository: Repository,
        issues: Vec<Issue>,
        rate_limit: RateLimit,
    },
    Issues {
        issues: Vec<Issue>,
        rate_limit: RateLimit,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    LoadInitial {
        repo: RepoId,
        query: IssueQuery,
        request: RequestId,
    },
    FetchIssues {
        repo: RepoId,
        query: IssueQuery,
        request: RequestId,
    },
    OpenUrl(String),
}
