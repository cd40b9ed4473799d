//! Command plumbing shared by the analyzer subcommands: merge CLI flags with
//! the config file, build the provider client, narrate the outcome.

pub mod bugscan;
pub mod lint;

use anyhow::Result;
use colored::Colorize;
use mrlint_core::{
    AuthConfig, ChangeSetRef, GitHubClient, GitLabClient, ProviderClient, ProviderKind,
    ProxyConfig, ReviewPipeline, RunOutcome,
};

use crate::config_file::{self, FileConfig};
use crate::Cli;

const DEFAULT_SOURCE_ROOT: &str = "src/main/java";
const DEFAULT_CLASSES_ROOT: &str = "classes";
const DEFAULT_BUILD_ROOT: &str = "target";
const DEFAULT_THRESHOLD: u8 = 3;

/// Fully resolved run settings: CLI flags over config file over defaults.
#[derive(Debug)]
pub struct Settings {
    pub changeset: ChangeSetRef,
    pub auth: AuthConfig,
    pub proxy: Option<ProxyConfig>,
    pub artifact_id: String,
    pub threshold: u8,
    pub source_root: String,
    pub classes_root: String,
    pub build_root: String,
    pub skip: bool,
    pub exclusions: Vec<String>,
}

pub fn resolve(cli: &Cli) -> Result<Settings> {
    let file = config_file::load(cli.config.as_deref())?;
    let kind = provider_kind(cli, &file)?;

    let project_id = cli.project_id.clone().or(file.provider.project_id.clone());
    let repository = cli.repository.clone().or(file.provider.repository.clone());

    let changeset = ChangeSetRef::new(
        kind,
        cli.provider_url.clone().or(file.provider.url.clone()),
        project_id.clone(),
        repository.clone(),
        cli.merge_request.or(file.provider.merge_request),
    )?;

    let auth = AuthConfig::new(
        cli.token.as_deref().or(file.auth.token.as_deref()),
        cli.username.as_deref().or(file.auth.username.as_deref()),
        cli.password.as_deref().or(file.auth.password.as_deref()),
    )?;

    let proxy = cli
        .proxy_server
        .clone()
        .or(file.proxy.server.clone())
        .map(|server| ProxyConfig {
            server,
            username: cli.proxy_username.clone().or(file.proxy.username.clone()),
            password: cli.proxy_password.clone().or(file.proxy.password.clone()),
        });

    let artifact_id = cli
        .artifact_id
        .clone()
        .or(file.analyzer.artifact_id.clone())
        .unwrap_or_else(|| derive_artifact_id(repository.as_deref(), project_id.as_deref()));

    let mut exclusions = cli.exclusions.clone();
    exclusions.extend(file.analyzer.exclusions.iter().cloned());

    Ok(Settings {
        changeset,
        auth,
        proxy,
        artifact_id,
        threshold: cli
            .threshold
            .or(file.analyzer.threshold)
            .unwrap_or(DEFAULT_THRESHOLD),
        source_root: cli
            .source_root
            .clone()
            .or(file.analyzer.source_root.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE_ROOT.to_string()),
        classes_root: cli
            .classes_root
            .clone()
            .or(file.analyzer.classes_root.clone())
            .unwrap_or_else(|| DEFAULT_CLASSES_ROOT.to_string()),
        build_root: cli
            .build_root
            .clone()
            .or(file.analyzer.build_root.clone())
            .unwrap_or_else(|| DEFAULT_BUILD_ROOT.to_string()),
        skip: cli.skip || file.analyzer.skip,
        exclusions,
    })
}

fn provider_kind(cli: &Cli, file: &FileConfig) -> Result<ProviderKind> {
    if let Some(provider) = cli.provider {
        return Ok(provider.into());
    }
    match file.provider.kind.as_deref() {
        Some("gitlab") | None => Ok(ProviderKind::GitLab),
        Some("github") => Ok(ProviderKind::GitHub),
        Some(other) => anyhow::bail!("invalid configuration: unknown provider kind `{other}`"),
    }
}

/// The engine's project name when none is configured: the tail of whichever
/// repository identifier the provider uses.
fn derive_artifact_id(repository: Option<&str>, project_id: Option<&str>) -> String {
    repository
        .or(project_id)
        .and_then(|id| id.rsplit('/').next())
        .unwrap_or("project")
        .to_string()
}

pub fn provider_client(settings: &Settings) -> Result<Box<dyn ProviderClient>> {
    let client: Box<dyn ProviderClient> = match settings.changeset.kind {
        ProviderKind::GitLab => Box::new(GitLabClient::new(
            &settings.changeset,
            settings.auth.clone(),
            settings.proxy.as_ref(),
        )?),
        ProviderKind::GitHub => Box::new(GitHubClient::new(
            &settings.changeset,
            settings.auth.clone(),
            settings.proxy.as_ref(),
        )?),
    };
    Ok(client)
}

pub fn pipeline(settings: &Settings) -> ReviewPipeline {
    ReviewPipeline::new(settings.skip, settings.exclusions.iter().cloned())
}

pub fn print_header(analyzer: &str) {
    println!(
        "{}",
        format!("  mrlint v{} — {analyzer} review", mrlint_core::VERSION).bold()
    );
}

pub fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Skipped => {
            println!("  {}", "Static code review has been skipped.".dimmed());
        }
        RunOutcome::Excluded { analyzer } => {
            println!(
                "  {}",
                format!("Analyzer `{analyzer}` is excluded, nothing to do.").dimmed()
            );
        }
        RunOutcome::NoFilesToAnalyse => {
            println!("  {}", "No files found to analyse.".dimmed());
        }
        RunOutcome::NoFindings => {
            println!("  {}", "No findings above the threshold.".green());
        }
        RunOutcome::Published(count) => {
            println!(
                "  {}",
                format!("Posted {} to the change-set.", bottles(*count, "comment")).green()
            );
        }
    }
}

fn bottles(count: usize, noun: &str) -> String {
    match count {
        0 => format!("no {noun}"),
        1 => format!("1 {noun}"),
        n => format!("{n} {noun}s"),
    }
}
