//! `mrlint bugscan` — bug-pattern engine over the compiled artifacts.

use anyhow::Result;
use mrlint_core::{AnalyserEngine, AnalyzerConfig, BugScanEngine, CommandBackend, BUGSCAN};

use crate::Cli;

use super::{pipeline, print_header, print_outcome, provider_client, resolve};

pub fn run(cli: &Cli, engine_cmd: &str, engine_args: Vec<String>, source_ext: &str) -> Result<()> {
    let settings = resolve(cli)?;
    print_header(BUGSCAN);

    let provider = provider_client(&settings)?;
    let engine_cmd = engine_cmd.to_string();
    let source_ext = source_ext.to_string();

    let outcome = pipeline(&settings).run(BUGSCAN, provider.as_ref(), move |paths| {
        let config = AnalyzerConfig::new(
            &settings.artifact_id,
            paths,
            settings.threshold,
            &settings.build_root,
            &settings.source_root,
            &settings.classes_root,
        )?;
        let backend = CommandBackend::new(engine_cmd, engine_args);
        let engine = BugScanEngine::new(config, backend).with_extensions(&source_ext, "class");
        Ok(Box::new(engine) as Box<dyn AnalyserEngine>)
    })?;

    print_outcome(&outcome);
    Ok(())
}
