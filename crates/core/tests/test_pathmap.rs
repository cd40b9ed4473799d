use mrlint_core::{AnalyzerConfig, PathMapper};

fn mapper(build_root: &str, source_root: &str, artifact_root: &str) -> PathMapper {
    let config = AnalyzerConfig::new("app", Vec::new(), 3, build_root, source_root, artifact_root)
        .expect("valid config");
    PathMapper::new(&config)
}

#[test]
fn forward_maps_source_to_artifact() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(
        m.source_to_artifact("src/main/java/com/acme/A.java").as_deref(),
        Some("/build/classes/com/acme/A.class")
    );
}

#[test]
fn forward_rejects_paths_outside_source_root() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(m.source_to_artifact("src/test/java/com/acme/A.java"), None);
    assert_eq!(m.source_to_artifact("README.md"), None);
}

#[test]
fn forward_rejects_foreign_extensions() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(m.source_to_artifact("src/main/java/com/acme/schema.xml"), None);
}

#[test]
fn reverse_maps_class_identity_to_source() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(
        m.class_to_source("com.acme.A"),
        "src/main/java/com/acme/A.java"
    );
}

#[test]
fn reverse_maps_default_package_class() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(m.class_to_source("A"), "src/main/java/A.java");
}

#[test]
fn inner_classes_resolve_to_outer_source_file() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(
        m.class_to_source("com.acme.Outer$Inner"),
        "src/main/java/com/acme/Outer.java"
    );
    assert_eq!(
        m.class_to_source("com.acme.Outer$1"),
        "src/main/java/com/acme/Outer.java"
    );
}

#[test]
fn artifact_to_class_recovers_identity() {
    let m = mapper("/build", "src/main/java", "classes");
    assert_eq!(
        m.artifact_to_class("/build/classes/com/acme/A.class").as_deref(),
        Some("com.acme.A")
    );
    assert_eq!(m.artifact_to_class("/elsewhere/com/acme/A.class"), None);
}

#[test]
fn round_trip_is_identity_under_configured_prefixes() {
    let m = mapper("/build", "src/main/java", "classes");
    for source in [
        "src/main/java/A.java",
        "src/main/java/com/acme/A.java",
        "src/main/java/com/acme/deep/nested/pkg/LongClassName.java",
    ] {
        let artifact = m.source_to_artifact(source).expect("forward");
        let class = m.artifact_to_class(&artifact).expect("identity");
        assert_eq!(m.class_to_source(&class), source);
    }
}

#[test]
fn surrounding_slashes_in_configured_prefixes_are_ignored() {
    let config = AnalyzerConfig::new("app", Vec::new(), 3, "/build/", "/src/main/java/", "/classes/")
        .expect("valid config");
    let m = PathMapper::new(&config);
    assert_eq!(
        m.source_to_artifact("src/main/java/com/acme/A.java").as_deref(),
        Some("/build/classes/com/acme/A.class")
    );
}

#[test]
fn custom_extensions_apply_to_both_directions() {
    let m = mapper("out", "src", "bin").with_extensions("kt", "jar");
    assert_eq!(
        m.source_to_artifact("src/com/acme/A.kt").as_deref(),
        Some("out/bin/com/acme/A.jar")
    );
    assert_eq!(m.class_to_source("com.acme.A"), "src/com/acme/A.kt");
}
