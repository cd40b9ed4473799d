//! The orchestration pipeline.
//!
//! Strictly forward, no retries: resolve affected paths, run the analyzer,
//! publish the issues. The pipeline owns the skip/exclusion policy and
//! drives provider and engine through their traits without knowing which
//! variants it holds.

use std::collections::HashSet;

use crate::analyzer::AnalyserEngine;
use crate::error::ReviewError;
use crate::provider::ProviderClient;

/// Terminal state of one run. Everything except an `Err` from [`ReviewPipeline::run`]
/// is a normal completion; the early terminations are informational, not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The global skip flag was set; nothing was called.
    Skipped,
    /// The active analyzer is in the exclusion set; nothing was called.
    Excluded { analyzer: String },
    /// The change-set touches no files.
    NoFilesToAnalyse,
    /// The analyzer ran and reported nothing above the threshold.
    NoFindings,
    /// All issues were published as inline comments.
    Published(usize),
}

pub struct ReviewPipeline {
    skip: bool,
    exclusions: HashSet<String>,
}

impl ReviewPipeline {
    pub fn new(skip: bool, exclusions: impl IntoIterator<Item = String>) -> Self {
        ReviewPipeline {
            skip,
            exclusions: exclusions.into_iter().collect(),
        }
    }

    /// Runs the pipeline to one of its terminal states.
    ///
    /// The engine is built from the resolved paths by `make_engine`, fresh
    /// for this run; engines are one-shot and never reused. Metadata is
    /// resolved only once there is something to publish.
    pub fn run<F>(
        &self,
        analyzer_name: &str,
        provider: &dyn ProviderClient,
        make_engine: F,
    ) -> Result<RunOutcome, ReviewError>
    where
        F: FnOnce(Vec<String>) -> Result<Box<dyn AnalyserEngine>, ReviewError>,
    {
        if self.skip {
            return Ok(RunOutcome::Skipped);
        }
        if self.exclusions.contains(analyzer_name) {
            return Ok(RunOutcome::Excluded {
                analyzer: analyzer_name.to_string(),
            });
        }

        let paths = provider.affected_paths()?;
        if paths.is_empty() {
            return Ok(RunOutcome::NoFilesToAnalyse);
        }

        let mut engine = make_engine(paths)?;
        engine.analyse()?;

        let issues = engine.reported_issues();
        if issues.is_empty() {
            return Ok(RunOutcome::NoFindings);
        }

        let metadata = provider.metadata()?;
        let published = provider.publish_comments(&issues, &metadata)?;
        Ok(RunOutcome::Published(published))
    }
}
