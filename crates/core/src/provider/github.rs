//! GitHub-style provider client (REST, API version 2022-11-28).

use serde::{Deserialize, Serialize};

use crate::config::{AuthConfig, ChangeSetRef, ProxyConfig};
use crate::error::ReviewError;
use crate::finding::Issue;

use super::{blocking_client, check_status, ChangeSetMetadata, ProviderClient};

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const PER_PAGE: usize = 100;

pub struct GitHubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    repository: String,
    pull_number: u64,
    auth: AuthConfig,
}

// ── Wire types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct PullRequestFile {
    filename: String,
}

#[derive(Deserialize)]
struct PullRequest {
    head: Head,
}

#[derive(Deserialize)]
struct Head {
    sha: String,
}

#[derive(Serialize)]
struct NewComment<'a> {
    body: &'a str,
    commit_id: &'a str,
    path: &'a str,
    line: u32,
    side: &'static str,
}

// ── Client ───────────────────────────────────────────────────────

impl GitHubClient {
    pub fn new(
        changeset: &ChangeSetRef,
        auth: AuthConfig,
        proxy: Option<&ProxyConfig>,
    ) -> Result<Self, ReviewError> {
        let repository = changeset
            .repository
            .as_deref()
            .ok_or_else(|| ReviewError::config("GitHub repository slug must be present"))?;

        Ok(GitHubClient {
            http: blocking_client(proxy)?,
            base_url: changeset.base_url.clone(),
            repository: repository.to_string(),
            pull_number: changeset.number,
            auth,
        })
    }

    fn pull_url(&self, suffix: &str) -> String {
        format!(
            "{}/repos/{}/pulls/{}{}",
            self.base_url, self.repository, self.pull_number, suffix
        )
    }

    fn request(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        let request = request
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        match &self.auth {
            AuthConfig::Token(token) => request.bearer_auth(token),
            AuthConfig::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

impl ProviderClient for GitHubClient {
    fn affected_paths(&self) -> Result<Vec<String>, ReviewError> {
        let url = self.pull_url("/files");
        let per_page = PER_PAGE.to_string();
        let mut paths = Vec::new();
        let mut page = 1u32;

        // The file listing is paginated; a short page marks the last one.
        loop {
            let page_param = page.to_string();
            let response = self
                .request(self.http.get(&url).query(&[
                    ("per_page", per_page.as_str()),
                    ("page", page_param.as_str()),
                ]))
                .send()
                .map_err(|e| ReviewError::provider("fetching pull request files", e))?;
            let files: Vec<PullRequestFile> =
                check_status(response, "fetching pull request files")?
                    .json()
                    .map_err(|e| ReviewError::provider("parsing pull request files", e))?;

            let full_page = files.len() >= PER_PAGE;
            paths.extend(files.into_iter().map(|f| f.filename));
            if !full_page {
                return Ok(paths);
            }
            page += 1;
        }
    }

    fn metadata(&self) -> Result<ChangeSetMetadata, ReviewError> {
        let url = self.pull_url("");
        let response = self
            .request(self.http.get(&url))
            .send()
            .map_err(|e| ReviewError::provider("fetching pull request", e))?;
        let pull: PullRequest = check_status(response, "fetching pull request")?
            .json()
            .map_err(|e| ReviewError::provider("parsing pull request", e))?;

        Ok(ChangeSetMetadata::GitHub {
            commit_sha: pull.head.sha,
        })
    }

    fn publish_comments(
        &self,
        issues: &[Issue],
        metadata: &ChangeSetMetadata,
    ) -> Result<usize, ReviewError> {
        let commit_sha = match metadata {
            ChangeSetMetadata::GitHub { commit_sha } => commit_sha,
            ChangeSetMetadata::GitLab { .. } => {
                return Err(ReviewError::config(
                    "change-set metadata belongs to a different provider",
                ))
            }
        };

        let url = self.pull_url("/comments");
        for issue in issues {
            let comment = NewComment {
                body: &issue.message,
                commit_id: commit_sha,
                path: &issue.source_path,
                line: issue.line,
                side: "RIGHT",
            };

            let response = self
                .request(self.http.post(&url))
                .json(&comment)
                .send()
                .map_err(|e| ReviewError::provider("posting review comment", e))?;
            check_status(response, "posting review comment")?;
        }

        Ok(issues.len())
    }
}
