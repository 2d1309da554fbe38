use std::net::IpAddr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::FetchError;
use super::models::*;

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        if !api_url.starts_with("https://") && !is_loopback(api_url) {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }

        let mut builder = Client::builder().user_agent("ghissues").timeout(timeout);
        if is_loopback(api_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GET `path` relative to the base URL and deserialize the body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<(T, RateLimit), FetchError> {
        let url = format!("{}{}", self.api_url, path);
        debug!(url = %url, ?params, "GET");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let rate_limit = extract_rate_limit(resp.headers());

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(classify_failure(status, &rate_limit, path, &text));
        }

        let data = resp.json::<T>().await?;
        Ok((data, rate_limit))
    }

    pub async fn fetch_repository(&self, repo: &RepoId) -> Result<(Repository, RateLimit), FetchError> {
        let (repository, rate_limit) = self.get::<Repository>(&repo.repo_path(), &[]).await?;
        debug!(repo = %repo, "Fetched repository");
        Ok((repository, rate_limit))
    }

    pub async fn fetch_issues(
        &self,
        repo: &RepoId,
        query: &IssueQuery,
    ) -> Result<(Vec<Issue>, RateLimit), FetchError> {
        let (issues, rate_limit) = self
            .get::<Vec<Issue>>(&repo.issues_path(), &query.params())
            .await?;
        debug!(
            repo = %repo,
            state = %query.filter,
            page = query.pagination.page,
            count = issues.len(),
            "Fetched issues"
        );
        Ok((issues, rate_limit))
    }

    /// Fetch the repository and its first issue page concurrently; both must succeed.
    pub async fn fetch_initial(
        &self,
        repo: &RepoId,
        query: &IssueQuery,
    ) -> Result<(Repository, Vec<Issue>, RateLimit), FetchError> {
        let ((repository, _), (issues, rate_limit)) =
            tokio::try_join!(self.fetch_repository(repo), self.fetch_issues(repo, query))?;
        Ok((repository, issues, rate_limit))
    }
}

/// Plain `http://` URLs pointing at this machine: `localhost` or a loopback IP.
fn is_loopback(api_url: &str) -> bool {
    let Ok(url) = Url::parse(api_url) else {
        return false;
    };
    if url.scheme() != "http" || !url.username().is_empty() || url.password().is_some() {
        return false;
    }
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

fn extract_rate_limit(headers: &HeaderMap) -> RateLimit {
    let header_u64 = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
    };

    RateLimit {
        remaining: header_u64("x-ratelimit-remaining").unwrap_or(0) as u32,
        limit: header_u64("x-ratelimit-limit").unwrap_or(0) as u32,
        reset_at: header_u64("x-ratelimit-reset")
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs as i64, 0)),
    }
}

fn classify_failure(status: StatusCode, rate_limit: &RateLimit, path: &str, body: &str) -> FetchError {
    let exhausted = rate_limit.limit > 0 && rate_limit.remaining == 0;
    match status {
        StatusCode::NOT_FOUND => FetchError::NotFound(path.to_string()),
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited {
            reset_at: rate_limit.reset_at,
        },
        StatusCode::FORBIDDEN if exhausted => FetchError::RateLimited {
            reset_at: rate_limit.reset_at,
        },
        _ => {
            let message = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_else(|| body.trim().to_string());
            FetchError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
