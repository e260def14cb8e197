//! Integration tests for the deadweight analysis pipeline
//!
//! These tests run the complete pipeline against the webapp fixture.

use deadweight::analysis::{FindingKind, Report};
use deadweight::config::Config;
use deadweight::discovery::FileFinder;
use deadweight::manifest::{DependencyUniverse, PackageManifest};
use deadweight::resolver::lexical_canonical;
use deadweight::{CorpusBuilder, ParallelCorpusBuilder, UnusedAnalyzer};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn webapp_root() -> PathBuf {
    lexical_canonical(&fixtures_path().join("webapp"))
}

/// Run the full pipeline over the webapp fixture
fn analyze_webapp(config: &Config) -> Report {
    let root = webapp_root();

    let finder = FileFinder::new(config);
    let files = finder.find_files(&root).expect("discovery must not fail");
    assert!(!files.is_empty(), "fixture project should contain files");

    let corpus = ParallelCorpusBuilder::new(config, &root)
        .build_from_files(&files)
        .expect("corpus build must not fail");

    let manifest = PackageManifest::load(&root).expect("fixture has a package.json");
    let dependencies =
        DependencyUniverse::from_manifest(&manifest, config.include_dev_dependencies);

    UnusedAnalyzer::new(config, &root).analyze(&corpus, &dependencies)
}

fn names_of(report: &Report, kind: FindingKind) -> Vec<String> {
    report.of_kind(kind).map(|f| f.name.clone()).collect()
}

#[test]
fn test_discovers_only_source_extensions() {
    let config = Config::default();
    let finder = FileFinder::new(&config);
    let files = finder.find_files(&webapp_root()).unwrap();

    // page.tsx, layout.tsx, Button.tsx, helper.ts, legacy.ts
    assert_eq!(files.len(), 5);
    assert!(files
        .iter()
        .all(|f| matches!(f.path.extension().and_then(|e| e.to_str()), Some("ts") | Some("tsx"))));
}

#[test]
fn test_unused_dependencies() {
    let config = Config::default();
    let report = analyze_webapp(&config);

    let unused = names_of(&report, FindingKind::UnusedDependency);
    assert!(unused.contains(&"lodash".to_string()));
    assert!(unused.contains(&"left-pad".to_string()));
    assert!(!unused.contains(&"react".to_string()), "react is imported");
    // devDependencies count by default
    assert!(unused.contains(&"typescript".to_string()));
    assert!(!report.dependency_analysis_skipped);
}

#[test]
fn test_dev_dependency_policy() {
    let mut config = Config::default();
    config.include_dev_dependencies = false;

    let report = analyze_webapp(&config);
    let unused = names_of(&report, FindingKind::UnusedDependency);

    assert!(unused.contains(&"lodash".to_string()));
    assert!(
        !unused.contains(&"typescript".to_string()),
        "devDependencies are out of the declared universe under the prod-only policy"
    );
}

#[test]
fn test_unused_functions() {
    let config = Config::default();
    let report = analyze_webapp(&config);

    let unused = names_of(&report, FindingKind::UnusedFunction);
    assert_eq!(unused, vec!["foo".to_string(), "oldThing".to_string()]);

    // foo is reported against its owning file
    let foo = report
        .of_kind(FindingKind::UnusedFunction)
        .find(|f| f.name == "foo")
        .unwrap();
    let file = foo.file.as_ref().unwrap();
    assert!(file.ends_with("src/util/helper.ts"));

    // formatDate is called, Button appears as a markup tag: neither is unused
    assert!(!unused.contains(&"formatDate".to_string()));
    assert!(!unused.contains(&"Button".to_string()));
}

#[test]
fn test_unused_files() {
    let config = Config::default();
    let report = analyze_webapp(&config);

    let unused = names_of(&report, FindingKind::UnusedFile);
    assert_eq!(unused.len(), 1, "only legacy.ts is an orphan: {:?}", unused);
    assert!(unused[0].ends_with("src/util/legacy.ts"));
}

#[test]
fn test_framework_entry_prefix_exemption() {
    let config = Config::default();
    let report = analyze_webapp(&config);

    // page.tsx has no inbound import but lives under src/app
    let unused = names_of(&report, FindingKind::UnusedFile);
    assert!(!unused.iter().any(|f| f.ends_with("page.tsx")));
    assert!(!unused.iter().any(|f| f.ends_with("layout.tsx")));
}

#[test]
fn test_idempotence() {
    let config = Config::default();
    let first = analyze_webapp(&config);
    let second = analyze_webapp(&config);

    assert_eq!(first.findings, second.findings);
    assert_eq!(first.files_scanned, second.files_scanned);
}

#[test]
fn test_sequential_builder_matches_parallel() {
    let config = Config::default();
    let root = webapp_root();

    let finder = FileFinder::new(&config);
    let mut files = finder.find_files(&root).unwrap();
    // deterministic processing order for the sequential run
    files.sort_by(|a, b| a.path.cmp(&b.path));

    let mut builder = CorpusBuilder::new(&config, &root);
    for file in &files {
        builder.process_file(file).unwrap();
    }
    let sequential = builder.build();

    let parallel = ParallelCorpusBuilder::new(&config, &root)
        .build_from_files(&files)
        .unwrap();

    assert_eq!(sequential.used_packages, parallel.used_packages);
    assert_eq!(sequential.used_names, parallel.used_names);
    assert_eq!(sequential.declarations.len(), parallel.declarations.len());

    let manifest = PackageManifest::load(&root).unwrap();
    let dependencies = DependencyUniverse::from_manifest(&manifest, true);
    let analyzer = UnusedAnalyzer::new(&config, &root);

    let seq_report = analyzer.analyze(&sequential, &dependencies);
    let par_report = analyzer.analyze(&parallel, &dependencies);
    assert_eq!(seq_report.findings, par_report.findings);
}

#[test]
fn test_missing_manifest_is_skipped_not_clean() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(root.join("src/a.ts"), "export const a = 1;\n").unwrap();

    let config = Config::default();
    let finder = FileFinder::new(&config);
    let files = finder.find_files(&root).unwrap();

    let corpus = ParallelCorpusBuilder::new(&config, &root)
        .build_from_files(&files)
        .unwrap();

    let report = UnusedAnalyzer::new(&config, &root)
        .analyze(&corpus, &DependencyUniverse::skipped());

    assert!(report.dependency_analysis_skipped);
    assert_eq!(report.count_of(FindingKind::UnusedDependency), 0);
}
