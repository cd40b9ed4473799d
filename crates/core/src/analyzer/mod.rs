//! Analyzer engines.
//!
//! An `AnalyserEngine` runs one wrapped static-analysis tool against the
//! files of one change-set and flattens the tool's native result model into
//! provider-agnostic [`Issue`]s. Engines are one-shot: construct a fresh
//! instance per run, call [`analyse`](AnalyserEngine::analyse) once, then
//! read the issues.

mod bugscan;
mod lint;
pub mod sarif;

pub use bugscan::{BugScanEngine, BUGSCAN};
pub use lint::{LintEngine, LINT};

use std::path::Path;
use std::process::Command;

use crate::error::ReviewError;
use crate::finding::Issue;

use sarif::SarifLog;

pub trait AnalyserEngine {
    /// Stable name used as the key of the exclusion set.
    fn name(&self) -> &'static str;

    /// Runs the wrapped tool. Findings below the configured severity
    /// threshold are cut here, not by the caller. A failure aborts the run;
    /// no partial issue list survives it.
    fn analyse(&mut self) -> Result<(), ReviewError>;

    /// One issue per (defect, resolvable source line) pair. A defect with no
    /// resolvable line contributes nothing.
    fn reported_issues(&self) -> Vec<Issue>;
}

/// Seam between an engine and the tool it wraps. The default implementation
/// spawns an external command; tests substitute canned reports.
pub trait ScanBackend {
    fn run(&self, inputs: &[String]) -> Result<SarifLog, ReviewError>;
}

/// Launches `<program> <args…> --output <report> <inputs…>` and reads the
/// SARIF report the tool writes. The wrapped tool owns the analysis; this
/// side only cares that the report parses.
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandBackend {
            program: program.into(),
            args,
        }
    }
}

impl ScanBackend for CommandBackend {
    fn run(&self, inputs: &[String]) -> Result<SarifLog, ReviewError> {
        let scratch = tempfile::tempdir()
            .map_err(|e| ReviewError::AnalysisFailed(format!("cannot create scratch dir: {e}")))?;
        let report_path = scratch.path().join("report.sarif");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--output")
            .arg(&report_path)
            .args(inputs)
            .output()
            .map_err(|e| {
                ReviewError::AnalysisFailed(format!("cannot launch `{}`: {e}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReviewError::AnalysisFailed(format!(
                "`{}` exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        read_report(&report_path)
    }
}

fn read_report(path: &Path) -> Result<SarifLog, ReviewError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ReviewError::AnalysisFailed(format!("cannot read report {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ReviewError::AnalysisFailed(format!("cannot parse report {}: {e}", path.display()))
    })
}
