use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures surfaced by [`GithubClient`](super::GithubClient) requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("GitHub rate limit exceeded{}", reset_suffix(.reset_at))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse GitHub response: {0}")]
    Decode(String),
}

fn reset_suffix(reset_at: &Option<DateTime<Utc>>) -> String {
    reset_at
        .map(|t| format!(", resets at {}", t.format("%H:%M:%S UTC")))
        .unwrap_or_default()
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
