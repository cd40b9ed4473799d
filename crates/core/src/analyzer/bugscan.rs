//! Bug-pattern engine variant.
//!
//! Analyses compiled artifacts, not sources: candidate paths are filtered to
//! source files under the source root and forward-mapped to their compiled
//! counterparts before the tool runs. Results identify defects by
//! fully-qualified class identity, which is reverse-mapped into source
//! coordinates for commenting.

use crate::config::AnalyzerConfig;
use crate::error::ReviewError;
use crate::finding::Issue;
use crate::pathmap::PathMapper;

use super::sarif::{SarifLog, SarifResult};
use super::{AnalyserEngine, ScanBackend};

pub const BUGSCAN: &str = "bugscan";

pub struct BugScanEngine<B: ScanBackend> {
    config: AnalyzerConfig,
    mapper: PathMapper,
    backend: B,
    report: Option<SarifLog>,
}

impl<B: ScanBackend> BugScanEngine<B> {
    pub fn new(config: AnalyzerConfig, backend: B) -> Self {
        let mapper = PathMapper::new(&config);
        BugScanEngine {
            config,
            mapper,
            backend,
            report: None,
        }
    }

    /// Overrides the source/artifact extensions, for languages other than
    /// the defaults.
    pub fn with_extensions(mut self, source_ext: &str, artifact_ext: &str) -> Self {
        self.mapper = self.mapper.with_extensions(source_ext, artifact_ext);
        self
    }

    /// Defect identity: the first fully-qualified logical name, falling back
    /// to the identity encoded in the artifact path.
    fn class_identity(&self, result: &SarifResult) -> Option<String> {
        for location in &result.locations {
            for logical in &location.logical_locations {
                if let Some(name) = &logical.fully_qualified_name {
                    return Some(name.clone());
                }
            }
            if let Some(artifact) = location
                .physical_location
                .as_ref()
                .and_then(|p| p.artifact_location.as_ref())
            {
                if let Some(class) = self.mapper.artifact_to_class(&artifact.uri) {
                    return Some(class);
                }
            }
        }
        None
    }
}

impl<B: ScanBackend> AnalyserEngine for BugScanEngine<B> {
    fn name(&self) -> &'static str {
        BUGSCAN
    }

    fn analyse(&mut self) -> Result<(), ReviewError> {
        let inputs: Vec<String> = self
            .config
            .file_paths
            .iter()
            .filter_map(|path| self.mapper.source_to_artifact(path))
            .collect();

        let mut report = if inputs.is_empty() {
            SarifLog::default()
        } else {
            self.backend.run(&inputs)?
        };

        // The threshold cut happens here, at the source.
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
            let Some(class) = self.class_identity(result) else {
                continue;
            };
            let source_path = self.mapper.class_to_source(&class);

            // One issue per located line; unlocated annotations drop out.
            for location in &result.locations {
                if let Some(line) = location.line() {
                    issues.push(Issue::new(&source_path, line, &result.message.text));
                }
            }
        }
        issues
    }
}
