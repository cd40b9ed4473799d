//! Hosting-provider clients.
//!
//! A `ProviderClient` answers three questions about one change-set: which
//! files it touches, which revisions anchor its diff view, and how to attach
//! an inline comment to it. The pipeline drives the trait without knowing
//! which backend is behind it.

mod github;
mod gitlab;

pub use github::GitHubClient;
pub use gitlab::GitLabClient;

use std::time::Duration;

use crate::config::ProxyConfig;
use crate::error::ReviewError;
use crate::finding::Issue;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("mrlint/", env!("CARGO_PKG_VERSION"));

/// Revision anchor for inline comments, narrowed per provider.
///
/// The pipeline hands this through unexamined from the read side to the
/// write side; only the client that produced it looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSetMetadata {
    /// GitLab anchors a discussion on the diff-refs sha triple.
    GitLab {
        base_sha: String,
        head_sha: String,
        start_sha: String,
    },
    /// GitHub anchors a review comment on the head commit.
    GitHub { commit_sha: String },
}

pub trait ProviderClient {
    /// New-side path of every file touched by the change-set.
    fn affected_paths(&self) -> Result<Vec<String>, ReviewError>;

    /// Revision anchor; must be resolved before [`publish_comments`](Self::publish_comments).
    fn metadata(&self) -> Result<ChangeSetMetadata, ReviewError>;

    /// One inline comment per issue, one remote write each. Re-running on an
    /// unchanged issue set re-posts duplicates; that is the documented
    /// contract, not an oversight.
    fn publish_comments(
        &self,
        issues: &[Issue],
        metadata: &ChangeSetMetadata,
    ) -> Result<usize, ReviewError>;
}

/// Blocking client shared by both providers: fixed timeout, identifying
/// user agent, optional outbound proxy.
pub(crate) fn blocking_client(
    proxy: Option<&ProxyConfig>,
) -> Result<reqwest::blocking::Client, ReviewError> {
    let mut builder = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT);

    if let Some(proxy) = proxy {
        let mut outbound = reqwest::Proxy::all(&proxy.server)
            .map_err(|e| ReviewError::config(format!("invalid proxy address: {e}")))?;
        if let (Some(user), Some(pass)) = (&proxy.username, &proxy.password) {
            outbound = outbound.basic_auth(user, pass);
        }
        builder = builder.proxy(outbound);
    }

    builder
        .build()
        .map_err(|e| ReviewError::config(format!("failed to build HTTP client: {e}")))
}

/// Maps a non-success response to the error taxonomy: 404 means the
/// configured identifiers do not resolve, everything else is a provider
/// failure.
pub(crate) fn check_status(
    response: reqwest::blocking::Response,
    context: &str,
) -> Result<reqwest::blocking::Response, ReviewError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ReviewError::config(format!(
            "{context}: the configured project or change-set does not exist ({status})"
        )));
    }
    Err(ReviewError::provider_status(format!(
        "{context}: HTTP {status}: {body}"
    )))
}
