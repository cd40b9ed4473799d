//! GitLab-style provider client (REST v4).

use serde::{Deserialize, Serialize};

use crate::config::{AuthConfig, ChangeSetRef, ProxyConfig};
use crate::error::ReviewError;
use crate::finding::Issue;

use super::{blocking_client, check_status, ChangeSetMetadata, ProviderClient};

#[derive(Debug)]
pub struct GitLabClient {
    http: reqwest::blocking::Client,
    base_url: String,
    project_id: String,
    merge_request_iid: u64,
    auth: AuthConfig,
}

// ── Wire types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct MergeRequestChanges {
    #[serde(default)]
    changes: Vec<Change>,
}

#[derive(Deserialize)]
struct Change {
    new_path: String,
}

#[derive(Deserialize)]
struct MergeRequest {
    diff_refs: DiffRefs,
}

#[derive(Deserialize)]
struct DiffRefs {
    base_sha: String,
    head_sha: String,
    start_sha: String,
}

#[derive(Serialize)]
struct NewDiscussion<'a> {
    body: &'a str,
    position: Position<'a>,
}

#[derive(Serialize)]
struct Position<'a> {
    position_type: &'static str,
    new_line: u32,
    base_sha: &'a str,
    head_sha: &'a str,
    start_sha: &'a str,
    old_path: &'a str,
    new_path: &'a str,
}

// ── Client ───────────────────────────────────────────────────────

impl GitLabClient {
    pub fn new(
        changeset: &ChangeSetRef,
        auth: AuthConfig,
        proxy: Option<&ProxyConfig>,
    ) -> Result<Self, ReviewError> {
        let project_id = changeset
            .project_id
            .as_deref()
            .ok_or_else(|| ReviewError::config("GitLab project id must be present"))?;

        Ok(GitLabClient {
            http: blocking_client(proxy)?,
            base_url: changeset.base_url.clone(),
            // Namespaced ids ("group/project") must be path-encoded.
            project_id: project_id.replace('/', "%2F"),
            merge_request_iid: changeset.number,
            auth,
        })
    }

    fn mr_url(&self, suffix: &str) -> String {
        format!(
            "{}/api/v4/projects/{}/merge_requests/{}{}",
            self.base_url, self.project_id, self.merge_request_iid, suffix
        )
    }

    fn authorize(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.auth {
            AuthConfig::Token(token) => request.header("PRIVATE-TOKEN", token),
            AuthConfig::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

impl ProviderClient for GitLabClient {
    fn affected_paths(&self) -> Result<Vec<String>, ReviewError> {
        let url = self.mr_url("/changes");
        let response = self
            .authorize(self.http.get(&url))
            .send()
            .map_err(|e| ReviewError::provider("fetching merge request changes", e))?;
        let changes: MergeRequestChanges = check_status(response, "fetching merge request changes")?
            .json()
            .map_err(|e| ReviewError::provider("parsing merge request changes", e))?;

        Ok(changes.changes.into_iter().map(|c| c.new_path).collect())
    }

    fn metadata(&self) -> Result<ChangeSetMetadata, ReviewError> {
        let url = self.mr_url("");
        let response = self
            .authorize(self.http.get(&url))
            .send()
            .map_err(|e| ReviewError::provider("fetching merge request", e))?;
        let mr: MergeRequest = check_status(response, "fetching merge request")?
            .json()
            .map_err(|e| ReviewError::provider("parsing merge request", e))?;

        Ok(ChangeSetMetadata::GitLab {
            base_sha: mr.diff_refs.base_sha,
            head_sha: mr.diff_refs.head_sha,
            start_sha: mr.diff_refs.start_sha,
        })
    }

    fn publish_comments(
        &self,
        issues: &[Issue],
        metadata: &ChangeSetMetadata,
    ) -> Result<usize, ReviewError> {
        let (base_sha, head_sha, start_sha) = match metadata {
            ChangeSetMetadata::GitLab {
                base_sha,
                head_sha,
                start_sha,
            } => (base_sha, head_sha, start_sha),
            ChangeSetMetadata::GitHub { .. } => {
                return Err(ReviewError::config(
                    "change-set metadata belongs to a different provider",
                ))
            }
        };

        let url = self.mr_url("/discussions");
        for issue in issues {
            let discussion = NewDiscussion {
                body: &issue.message,
                position: Position {
                    position_type: "text",
                    new_line: issue.line,
                    base_sha,
                    head_sha,
                    start_sha,
                    old_path: &issue.source_path,
                    new_path: &issue.source_path,
                },
            };

            let response = self
                .authorize(self.http.post(&url))
                .json(&discussion)
                .send()
                .map_err(|e| ReviewError::provider("posting merge request discussion", e))?;
            check_status(response, "posting merge request discussion")?;
        }

        Ok(issues.len())
    }
}
