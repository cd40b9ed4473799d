//! Optional `.mrlint.toml` configuration file.
//!
//! The file supplies defaults for the same keys the CLI accepts; explicit
//! flags always win. A missing file is fine, a malformed one is a
//! configuration error.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = ".mrlint.toml";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub auth: AuthSection,
    #[serde(default)]
    pub proxy: ProxySection,
    #[serde(default)]
    pub analyzer: AnalyzerSection,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProviderSection {
    /// "gitlab" or "github"
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub merge_request: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AuthSection {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProxySection {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AnalyzerSection {
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub threshold: Option<u8>,
    #[serde(default)]
    pub source_root: Option<String>,
    #[serde(default)]
    pub classes_root: Option<String>,
    #[serde(default)]
    pub build_root: Option<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub skip: bool,
}

/// Loads the config file.
///
/// An explicitly named file must exist and parse; the default `.mrlint.toml`
/// is only read when present.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.exists() {
                return Ok(FileConfig::default());
            }
            default.to_path_buf()
        }
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("invalid configuration: cannot read {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid configuration: {}", path.display()))
}

pub fn parse(raw: &str) -> Result<FileConfig> {
    Ok(toml::from_str(raw)?)
}
