//! Immutable configuration value objects.
//!
//! Everything here is validated at construction time: a run that starts with
//! a `ChangeSetRef`, an `AuthConfig` and an `AnalyzerConfig` in hand cannot
//! fail later for configuration reasons.

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;
use crate::finding::Severity;

pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";
pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";

/// Which hosting backend the run talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    GitLab,
    GitHub,
}

/// Identifies one change-set on one hosting provider.
///
/// GitLab addresses a project by id (numeric or `group/name`), GitHub by an
/// `owner/repo` slug; the constructor enforces whichever the kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSetRef {
    pub kind: ProviderKind,
    pub base_url: String,
    pub project_id: Option<String>,
    pub repository: Option<String>,
    pub number: u64,
}

impl ChangeSetRef {
    pub fn new(
        kind: ProviderKind,
        base_url: Option<String>,
        project_id: Option<String>,
        repository: Option<String>,
        number: Option<u64>,
    ) -> Result<Self, ReviewError> {
        let number = number.ok_or_else(|| ReviewError::config("change-set number is missing"))?;

        let project_id = project_id.filter(|s| !s.trim().is_empty());
        let repository = repository.filter(|s| !s.trim().is_empty());

        let default_url = match kind {
            ProviderKind::GitLab => {
                if project_id.is_none() {
                    return Err(ReviewError::config(
                        "a GitLab project id is required for the gitlab provider",
                    ));
                }
                DEFAULT_GITLAB_URL
            }
            ProviderKind::GitHub => {
                if repository.is_none() {
                    return Err(ReviewError::config(
                        "an owner/repo slug is required for the github provider",
                    ));
                }
                DEFAULT_GITHUB_URL
            }
        };

        let base_url = base_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default_url.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(ChangeSetRef {
            kind,
            base_url,
            project_id,
            repository,
            number,
        })
    }
}

/// Credentials for the hosting provider.
///
/// A non-blank token wins over a username/password pair; with neither
/// present, construction fails before any network call is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthConfig {
    Token(String),
    Basic { username: String, password: String },
}

impl AuthConfig {
    pub fn new(
        token: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ReviewError> {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            return Ok(AuthConfig::Token(token.to_string()));
        }

        let username = username
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ReviewError::config("auth token is blank and no username is set"))?;
        let password = password
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ReviewError::config("auth token is blank and no password is set"))?;

        Ok(AuthConfig::Basic {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Optional outbound proxy; absent means direct connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub server: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Settings for one analyzer run over one change-set.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Artifact/module identifier, used as the engine's project name.
    pub artifact_id: String,
    /// Candidate source paths, as reported by the provider.
    pub file_paths: Vec<String>,
    /// Ordinal cut: findings less severe than this never surface.
    pub threshold: Severity,
    /// Build output root, e.g. `target`.
    pub build_root: String,
    /// Source-root prefix, e.g. `src/main/java`.
    pub source_root: String,
    /// Compiled-artifact-root prefix under the build root, e.g. `classes`.
    pub artifact_root: String,
}

impl AnalyzerConfig {
    pub fn new(
        artifact_id: impl Into<String>,
        file_paths: Vec<String>,
        threshold: u8,
        build_root: impl Into<String>,
        source_root: impl Into<String>,
        artifact_root: impl Into<String>,
    ) -> Result<Self, ReviewError> {
        let threshold = Severity::from_ordinal(threshold).ok_or_else(|| {
            ReviewError::config(format!(
                "severity threshold {threshold} is out of range (expected 1..=5)"
            ))
        })?;

        Ok(AnalyzerConfig {
            artifact_id: artifact_id.into(),
            file_paths,
            threshold,
            build_root: trim_build_root(&build_root.into()),
            source_root: trim_prefix(&source_root.into()),
            artifact_root: trim_prefix(&artifact_root.into()),
        })
    }
}

/// Relative prefixes lose surrounding slashes so they compose predictably.
fn trim_prefix(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// The build root keeps a leading slash: absolute roots stay absolute.
fn trim_build_root(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if path.starts_with('/') {
        format!("/{trimmed}")
    } else {
        trimmed.to_string()
    }
}
