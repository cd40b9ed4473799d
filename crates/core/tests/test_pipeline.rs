use std::cell::{Cell, RefCell};

use mrlint_core::{
    AnalyserEngine, ChangeSetMetadata, Issue, ProviderClient, ReviewError, ReviewPipeline,
    RunOutcome,
};

// ── Counting fakes ───────────────────────────────────────────────

#[derive(Default)]
struct FakeProvider {
    paths: Vec<String>,
    path_calls: Cell<usize>,
    metadata_calls: Cell<usize>,
    publish_calls: Cell<usize>,
    published: RefCell<Vec<Issue>>,
}

impl FakeProvider {
    fn with_paths(paths: &[&str]) -> Self {
        FakeProvider {
            paths: paths.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl ProviderClient for FakeProvider {
    fn affected_paths(&self) -> Result<Vec<String>, ReviewError> {
        self.path_calls.set(self.path_calls.get() + 1);
        Ok(self.paths.clone())
    }

    fn metadata(&self) -> Result<ChangeSetMetadata, ReviewError> {
        self.metadata_calls.set(self.metadata_calls.get() + 1);
        Ok(ChangeSetMetadata::GitHub {
            commit_sha: "0ff1ce".to_string(),
        })
    }

    fn publish_comments(
        &self,
        issues: &[Issue],
        _metadata: &ChangeSetMetadata,
    ) -> Result<usize, ReviewError> {
        self.publish_calls.set(self.publish_calls.get() + 1);
        self.published.borrow_mut().extend(issues.iter().cloned());
        Ok(issues.len())
    }
}

struct FakeEngine {
    issues: Vec<Issue>,
    fail: bool,
    analysed: bool,
}

impl FakeEngine {
    fn reporting(issues: Vec<Issue>) -> Self {
        FakeEngine {
            issues,
            fail: false,
            analysed: false,
        }
    }
}

impl AnalyserEngine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn analyse(&mut self) -> Result<(), ReviewError> {
        if self.fail {
            return Err(ReviewError::AnalysisFailed("boom".to_string()));
        }
        self.analysed = true;
        Ok(())
    }

    fn reported_issues(&self) -> Vec<Issue> {
        if !self.analysed {
            return Vec::new();
        }
        self.issues.clone()
    }
}

fn issue(line: u32) -> Issue {
    Issue::new("src/main/java/A.java", line, "finding")
}

// ── Skip policy ──────────────────────────────────────────────────

#[test]
fn skip_flag_terminates_before_any_call() {
    let provider = FakeProvider::with_paths(&["src/main/java/A.java"]);
    let engines_built = Cell::new(0usize);

    let pipeline = ReviewPipeline::new(true, Vec::new());
    let outcome = pipeline
        .run("fake", &provider, |_paths| {
            engines_built.set(engines_built.get() + 1);
            Ok(Box::new(FakeEngine::reporting(vec![issue(1)])) as Box<dyn AnalyserEngine>)
        })
        .unwrap();

    assert_eq!(outcome, RunOutcome::Skipped);
    assert_eq!(provider.path_calls.get(), 0);
    assert_eq!(provider.publish_calls.get(), 0);
    assert_eq!(engines_built.get(), 0);
}

#[test]
fn excluded_analyzer_terminates_before_any_call() {
    let provider = FakeProvider::with_paths(&["src/main/java/A.java"]);
    let engines_built = Cell::new(0usize);

    let pipeline = ReviewPipeline::new(false, vec!["fake".to_string(), "other".to_string()]);
    let outcome = pipeline
        .run("fake", &provider, |_paths| {
            engines_built.set(engines_built.get() + 1);
            Ok(Box::new(FakeEngine::reporting(vec![issue(1)])) as Box<dyn AnalyserEngine>)
        })
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Excluded {
            analyzer: "fake".to_string()
        }
    );
    assert_eq!(provider.path_calls.get(), 0);
    assert_eq!(provider.metadata_calls.get(), 0);
    assert_eq!(engines_built.get(), 0);
}

#[test]
fn exclusion_of_a_different_analyzer_does_not_match() {
    let provider = FakeProvider::with_paths(&[]);
    let pipeline = ReviewPipeline::new(false, vec!["other".to_string()]);
    let outcome = pipeline
        .run("fake", &provider, |_paths| {
            Ok(Box::new(FakeEngine::reporting(Vec::new())) as Box<dyn AnalyserEngine>)
        })
        .unwrap();

    assert_eq!(outcome, RunOutcome::NoFilesToAnalyse);
    assert_eq!(provider.path_calls.get(), 1);
}

// ── Early terminations ───────────────────────────────────────────

#[test]
fn empty_affected_paths_invoke_no_analyzer_and_no_publish() {
    let provider = FakeProvider::with_paths(&[]);
    let engines_built = Cell::new(0usize);

    let pipeline = ReviewPipeline::new(false, Vec::new());
    let outcome = pipeline
        .run("fake", &provider, |_paths| {
            engines_built.set(engines_built.get() + 1);
            Ok(Box::new(FakeEngine::reporting(vec![issue(1)])) as Box<dyn AnalyserEngine>)
        })
        .unwrap();

    assert_eq!(outcome, RunOutcome::NoFilesToAnalyse);
    assert_eq!(engines_built.get(), 0);
    assert_eq!(provider.metadata_calls.get(), 0);
    assert_eq!(provider.publish_calls.get(), 0);
}

#[test]
fn empty_findings_invoke_no_publish() {
    let provider = FakeProvider::with_paths(&["src/main/java/A.java"]);

    let pipeline = ReviewPipeline::new(false, Vec::new());
    let outcome = pipeline
        .run("fake", &provider, |_paths| {
            Ok(Box::new(FakeEngine::reporting(Vec::new())) as Box<dyn AnalyserEngine>)
        })
        .unwrap();

    assert_eq!(outcome, RunOutcome::NoFindings);
    assert_eq!(provider.metadata_calls.get(), 0);
    assert_eq!(provider.publish_calls.get(), 0);
}

// ── Full run ─────────────────────────────────────────────────────

#[test]
fn findings_are_published_with_metadata_resolved_once() {
    let provider = FakeProvider::with_paths(&["src/main/java/A.java", "src/main/java/B.java"]);
    let seen_paths = RefCell::new(Vec::new());

    let pipeline = ReviewPipeline::new(false, Vec::new());
    let outcome = pipeline
        .run("fake", &provider, |paths| {
            seen_paths.borrow_mut().extend(paths);
            Ok(Box::new(FakeEngine::reporting(vec![issue(3), issue(9)]))
                as Box<dyn AnalyserEngine>)
        })
        .unwrap();

    assert_eq!(outcome, RunOutcome::Published(2));
    assert_eq!(
        seen_paths.borrow().as_slice(),
        &["src/main/java/A.java", "src/main/java/B.java"]
    );
    assert_eq!(provider.metadata_calls.get(), 1);
    assert_eq!(provider.publish_calls.get(), 1);
    assert_eq!(provider.published.borrow().len(), 2);
}

#[test]
fn analysis_failure_propagates_and_nothing_is_published() {
    let provider = FakeProvider::with_paths(&["src/main/java/A.java"]);

    let pipeline = ReviewPipeline::new(false, Vec::new());
    let err = pipeline
        .run("fake", &provider, |_paths| {
            Ok(Box::new(FakeEngine {
                issues: vec![issue(1)],
                fail: true,
                analysed: false,
            }) as Box<dyn AnalyserEngine>)
        })
        .unwrap_err();

    assert!(matches!(err, ReviewError::AnalysisFailed(_)));
    assert_eq!(provider.publish_calls.get(), 0);
}
