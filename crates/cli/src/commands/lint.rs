//! `mrlint lint` — style engine over the changed sources.

use anyhow::Result;
use mrlint_core::{AnalyserEngine, AnalyzerConfig, CommandBackend, LintEngine, LINT};

use crate::Cli;

use super::{pipeline, print_header, print_outcome, provider_client, resolve};

pub fn run(cli: &Cli, engine_cmd: &str, engine_args: Vec<String>, source_ext: &str) -> Result<()> {
    let settings = resolve(cli)?;
    print_header(LINT);

    let provider = provider_client(&settings)?;
    let engine_cmd = engine_cmd.to_string();
    let source_ext = source_ext.to_string();

    let outcome = pipeline(&settings).run(LINT, provider.as_ref(), move |paths| {
        let config = AnalyzerConfig::new(
            &settings.artifact_id,
            paths,
            settings.threshold,
            &settings.build_root,
            &settings.source_root,
            &settings.classes_root,
        )?;
        let backend = CommandBackend::new(engine_cmd, engine_args);
        let engine = LintEngine::new(config, backend).with_source_ext(&source_ext);
        Ok(Box::new(engine) as Box<dyn AnalyserEngine>)
    })?;

    print_outcome(&outcome);
    Ok(())
}
