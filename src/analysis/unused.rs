use super::{Corpus, Finding, Report};
use crate::config::Config;
use crate::manifest::DependencyUniverse;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Computes the three unused-sets by difference against declared universes.
///
/// Each difference is computed unconditionally; an empty result means
/// "clean", except for dependencies when the manifest was missing, which is
/// reported as skipped.
pub struct UnusedAnalyzer<'a> {
    config: &'a Config,
    project_root: &'a Path,
}

impl<'a> UnusedAnalyzer<'a> {
    pub fn new(config: &'a Config, project_root: &'a Path) -> Self {
        Self {
            config,
            project_root,
        }
    }

    pub fn analyze(&self, corpus: &Corpus, dependencies: &DependencyUniverse) -> Report {
        let mut findings = Vec::new();

        findings.extend(self.unused_dependencies(corpus, dependencies));
        findings.extend(self.unused_functions(corpus));
        findings.extend(self.unused_files(corpus));

        Report {
            findings,
            dependency_analysis_skipped: dependencies.skipped,
            files_scanned: corpus.files.len(),
            warnings: corpus.warnings.clone(),
        }
    }

    /// Declared dependency names minus packages some specifier resolved to
    fn unused_dependencies(
        &self,
        corpus: &Corpus,
        dependencies: &DependencyUniverse,
    ) -> Vec<Finding> {
        if dependencies.skipped {
            return Vec::new();
        }

        // declared is a BTreeSet, so this difference is already sorted
        dependencies
            .declared
            .iter()
            .filter(|name| !corpus.used_packages.contains(name.as_str()))
            .inspect(|name| debug!("Unused dependency: {}", name))
            .map(|name| Finding::dependency(name))
            .collect()
    }

    /// Declaration (name, file) pairs whose name never appears in the
    /// used-name set. Matching is by name only, across file boundaries.
    fn unused_functions(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut unused: Vec<&crate::parser::Declaration> = corpus
            .declarations
            .iter()
            .filter(|decl| !corpus.used_names.contains(&decl.name))
            .collect();

        unused.sort_by(|a, b| {
            (&a.file, a.line, &a.name).cmp(&(&b.file, b.line, &b.name))
        });

        unused.into_iter().map(Finding::function).collect()
    }

    /// Discovered files minus filename-ignored, framework-entry and imported
    /// ones
    fn unused_files(&self, corpus: &Corpus) -> Vec<Finding> {
        let mut unused: Vec<&PathBuf> = corpus
            .files
            .iter()
            .filter(|path| !corpus.ignored_files.contains(path.as_path()))
            .filter(|path| !self.config.is_entry_exempt(path, self.project_root))
            .filter(|path| !corpus.graph.is_imported(path))
            .collect();

        unused.sort();
        unused.dedup();

        unused
            .into_iter()
            .map(|path| Finding::file(path))
            .collect()
    }
}
