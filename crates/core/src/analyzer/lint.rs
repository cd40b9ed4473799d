//! Style/lint engine variant.
//!
//! Works on sources directly: candidate paths keep their source extension
//! and are handed to the tool unmapped, and results carry source-relative
//! physical locations already. The pipeline never sees this asymmetry with
//! the bug-pattern variant.

use crate::config::AnalyzerConfig;
use crate::error::ReviewError;
use crate::finding::Issue;
use crate::pathmap::PathMapper;

use super::sarif::SarifLog;
use super::{AnalyserEngine, ScanBackend};

pub const LINT: &str = "lint";

pub struct LintEngine<B: ScanBackend> {
    config: AnalyzerConfig,
    source_suffix: String,
    backend: B,
    report: Option<SarifLog>,
}

impl<B: ScanBackend> LintEngine<B> {
    pub fn new(config: AnalyzerConfig, backend: B) -> Self {
        let source_suffix = format!(".{}", PathMapper::new(&config).source_ext());
        LintEngine {
            config,
            source_suffix,
            backend,
            report: None,
        }
    }

    /// Overrides the source extension the engine lints, e.g. `kt`.
    pub fn with_source_ext(mut self, source_ext: &str) -> Self {
        self.source_suffix = format!(".{}", source_ext.trim_start_matches('.'));
        self
    }
}

impl<B: ScanBackend> AnalyserEngine for LintEngine<B> {
    fn name(&self) -> &'static str {
        LINT
    }

    fn analyse(&mut self) -> Result<(), ReviewError> {
        let inputs: Vec<String> = self
            .config
            .file_paths
            .iter()
            .filter(|path| path.ends_with(&self.source_suffix))
            .cloned()
            .collect();

        let mut report = if inputs.is_empty() {
            SarifLog::default()
        } else {
            self.backend.run(&inputs)?
        };

        let threshold = self.config.threshold;
        for run in &mut report.runs {
            run.results
                .retain(|result| result.severity().ordinal() <= threshold.ordinal());
        }

        self.report = Some(report);
        Ok(())
    }

    fn reported_issues(&self) -> Vec<Issue> {
        let Some(report) = &self.report else {
            return Vec::new();
        };

        let mut issues = Vec::new();
        for result in report.runs.iter().flat_map(|run| &run.results) {
            for location in &result.locations {
                let Some(line) = location.line() else {
                    continue;
                };
                let Some(artifact) = location
                    .physical_location
                    .as_ref()
                    .and_then(|p| p.artifact_location.as_ref())
                else {
                    continue;
                };
                issues.push(Issue::new(&artifact.uri, line, &result.message.text));
            }
        }
        issues
    }
}
