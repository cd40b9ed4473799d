//! mrlint CLI library — exposed for integration tests

pub mod commands;
pub mod config_file;

use clap::{Parser, Subcommand};
use mrlint_core::ProviderKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mrlint")]
#[command(about = "Posts static-analysis findings as inline review comments", long_about = None)]
#[command(version = mrlint_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Hosting backend: gitlab or github (default: gitlab)
    #[arg(long, value_enum, global = true)]
    pub provider: Option<Provider>,

    /// Provider base URL (defaults to gitlab.com / api.github.com)
    #[arg(long, global = true)]
    pub provider_url: Option<String>,

    /// GitLab project id, numeric or group/name
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// GitHub owner/repo slug
    #[arg(long, global = true)]
    pub repository: Option<String>,

    /// Merge/pull request number to review
    #[arg(long, global = true)]
    pub merge_request: Option<u64>,

    /// Bearer/private token (preferred credential)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Username, used with --password when no token is set
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password, used with --username when no token is set
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Outbound proxy address
    #[arg(long, global = true)]
    pub proxy_server: Option<String>,

    /// Proxy username
    #[arg(long, global = true)]
    pub proxy_username: Option<String>,

    /// Proxy password
    #[arg(long, global = true)]
    pub proxy_password: Option<String>,

    /// Artifact/module identifier handed to the engine
    #[arg(long, global = true)]
    pub artifact_id: Option<String>,

    /// Severity threshold, 1 (strictest) to 5
    #[arg(long, global = true)]
    pub threshold: Option<u8>,

    /// Source-root prefix (default: src/main/java)
    #[arg(long, global = true)]
    pub source_root: Option<String>,

    /// Compiled-artifact-root prefix under the build root (default: classes)
    #[arg(long, global = true)]
    pub classes_root: Option<String>,

    /// Build output root (default: target)
    #[arg(long, global = true)]
    pub build_root: Option<String>,

    /// Analyzer names to skip entirely
    #[arg(long = "exclude", value_delimiter = ',', global = true)]
    pub exclusions: Vec<String>,

    /// Skip the whole review step
    #[arg(long, global = true)]
    pub skip: bool,

    /// Config file (default: ./.mrlint.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bug-pattern engine against the compiled artifacts
    Bugscan {
        /// External engine command; must accept `--output <sarif-file>`
        #[arg(long, default_value = "spotbugs")]
        engine_cmd: String,

        /// Extra argument passed to the engine (repeatable)
        #[arg(long = "engine-arg")]
        engine_args: Vec<String>,

        /// Source-file extension the analysed artifacts are compiled from
        #[arg(long, default_value = "java")]
        source_ext: String,
    },

    /// Run the style engine against the changed sources
    Lint {
        /// External engine command; must accept `--output <sarif-file>`
        #[arg(long, default_value = "detekt")]
        engine_cmd: String,

        /// Extra argument passed to the engine (repeatable)
        #[arg(long = "engine-arg")]
        engine_args: Vec<String>,

        /// Source-file extension the engine lints
        #[arg(long, default_value = "kt")]
        source_ext: String,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Provider {
    Gitlab,
    Github,
}

impl From<Provider> for ProviderKind {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Gitlab => ProviderKind::GitLab,
            Provider::Github => ProviderKind::GitHub,
        }
    }
}
