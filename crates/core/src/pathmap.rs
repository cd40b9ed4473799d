//! Translates between provider-reported source paths and the compiled
//! artifact paths an engine analyses.
//!
//! Forward: `src/main/java/com/acme/A.java` → `/build/classes/com/acme/A.class`.
//! Reverse: class identity `com.acme.A` → `src/main/java/com/acme/A.java`.
//! Both directions are exact inverses under the configured prefixes.

use crate::config::AnalyzerConfig;

#[derive(Debug, Clone)]
pub struct PathMapper {
    source_root: String,
    build_root: String,
    artifact_root: String,
    source_ext: String,
    artifact_ext: String,
}

impl PathMapper {
    pub fn new(config: &AnalyzerConfig) -> Self {
        PathMapper {
            source_root: config.source_root.clone(),
            build_root: config.build_root.clone(),
            artifact_root: config.artifact_root.clone(),
            source_ext: "java".to_string(),
            artifact_ext: "class".to_string(),
        }
    }

    pub fn with_extensions(mut self, source_ext: &str, artifact_ext: &str) -> Self {
        self.source_ext = source_ext.trim_start_matches('.').to_string();
        self.artifact_ext = artifact_ext.trim_start_matches('.').to_string();
        self
    }

    pub fn source_ext(&self) -> &str {
        &self.source_ext
    }

    /// Maps a source path under the source root to its compiled artifact
    /// path. Returns `None` for paths outside the source root or with a
    /// foreign extension; such files have no artifact to analyse.
    pub fn source_to_artifact(&self, source_path: &str) -> Option<String> {
        let relative = source_path.strip_prefix(&format!("{}/", self.source_root))?;
        let stem = relative.strip_suffix(&format!(".{}", self.source_ext))?;
        Some(format!(
            "{}/{}/{}.{}",
            self.build_root, self.artifact_root, stem, self.artifact_ext
        ))
    }

    /// Maps a fully-qualified class-style identity back to the source path
    /// it was compiled from. Inner classes (`Outer$Inner`) resolve to the
    /// outer class's source file.
    pub fn class_to_source(&self, class_name: &str) -> String {
        let outer = class_name.split('$').next().unwrap_or(class_name);
        format!(
            "{}/{}.{}",
            self.source_root,
            outer.replace('.', "/"),
            self.source_ext
        )
    }

    /// Recovers the class identity encoded in an artifact path, if the path
    /// lies under the configured artifact root.
    pub fn artifact_to_class(&self, artifact_path: &str) -> Option<String> {
        let prefix = format!("{}/{}/", self.build_root, self.artifact_root);
        let relative = artifact_path.strip_prefix(&prefix)?;
        let stem = relative.strip_suffix(&format!(".{}", self.artifact_ext))?;
        Some(stem.replace('/', "."))
    }
}
