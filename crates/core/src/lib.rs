//! mrlint core — change-set review relay
//!
//! This crate wires a hosted change-set (merge/pull request) to a wrapped
//! static-analysis tool:
//! - Provider clients resolve affected files and publish inline comments
//! - Analyzer engines run a tool and flatten its native results
//! - The path mapper translates between source and compiled-artifact paths
//! - The pipeline sequences one run, including the skip/exclusion policy

pub mod analyzer;
pub mod config;
pub mod error;
pub mod finding;
pub mod pathmap;
pub mod pipeline;
pub mod provider;

pub use analyzer::{
    AnalyserEngine, BugScanEngine, CommandBackend, LintEngine, ScanBackend, BUGSCAN, LINT,
};
pub use config::{
    AnalyzerConfig, AuthConfig, ChangeSetRef, ProviderKind, ProxyConfig, DEFAULT_GITHUB_URL,
    DEFAULT_GITLAB_URL,
};
pub use error::ReviewError;
pub use finding::{Issue, Severity};
pub use pathmap::PathMapper;
pub use pipeline::{ReviewPipeline, RunOutcome};
pub use provider::{ChangeSetMetadata, GitHubClient, GitLabClient, ProviderClient};

/// mrlint version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
