// Corpus builders - sequential and parallel variants share the merge logic

use crate::config::Config;
use crate::discovery::SourceFile;
use crate::graph::ModuleGraph;
use crate::parser::{
    collect_declarations, collect_imports, collect_usages, scan_imports_fallback, Declaration,
    SourceParser, UsageEvent,
};
use crate::resolver::{lexical_canonical, ModuleResolver, Resolution};
use miette::Result;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pure per-file output, merged into the corpus at a single point
#[derive(Debug, Default)]
pub struct FileAnalysis {
    /// Canonical path of the analyzed file
    pub path: PathBuf,

    /// Packages this file's specifiers resolved to
    pub used_packages: HashSet<String>,

    /// Local files this file's specifiers resolved to, with the raw specifier
    pub module_refs: Vec<(PathBuf, String)>,

    /// Named declarations owned by this file (empty for filename-ignored files)
    pub declarations: Vec<Declaration>,

    /// Identifier-usage evidence found in this file
    pub usages: Vec<UsageEvent>,

    /// Whether the regex fallback had to stand in for the syntax tree
    pub fallback: bool,
}

/// A non-fatal problem encountered while processing one file
#[derive(Debug, Clone)]
pub struct FileWarning {
    pub file: PathBuf,
    pub message: String,
}

/// Merged global state consumed by the reachability engine
#[derive(Debug, Default)]
pub struct Corpus {
    /// All discovered files, canonicalized
    pub files: Vec<PathBuf>,

    /// The subset of `files` excluded by the filename ignore list
    pub ignored_files: HashSet<PathBuf>,

    /// Every named declaration across the corpus
    pub declarations: Vec<Declaration>,

    /// Flat used-name set, not partitioned by originating file
    pub used_names: HashSet<String>,

    /// Normalized package names with at least one resolving specifier
    pub used_packages: HashSet<String>,

    /// File-level import graph
    pub graph: ModuleGraph,

    /// Per-file warnings
    pub warnings: Vec<FileWarning>,
}

impl Corpus {
    fn from_parts(
        files: Vec<PathBuf>,
        ignored_files: HashSet<PathBuf>,
        analyses: Vec<FileAnalysis>,
        mut warnings: Vec<FileWarning>,
    ) -> Self {
        let mut declarations = Vec::new();
        let mut used_names = HashSet::new();
        let mut used_packages = HashSet::new();
        let mut graph = ModuleGraph::new();

        for analysis in analyses {
            if analysis.fallback {
                warnings.push(FileWarning {
                    file: analysis.path.clone(),
                    message: "could not be parsed; imports recovered by regex scan".to_string(),
                });
            }

            graph.ensure_module(&analysis.path);
            for (target, specifier) in analysis.module_refs {
                graph.add_import(&analysis.path, &target, specifier);
            }

            declarations.extend(analysis.declarations);
            used_names.extend(analysis.usages.into_iter().map(|u| u.name));
            used_packages.extend(analysis.used_packages);
        }

        info!(
            "Corpus: {} files, {} declarations, {} used names, {} used packages",
            files.len(),
            declarations.len(),
            used_names.len(),
            used_packages.len()
        );

        Self {
            files,
            ignored_files,
            declarations,
            used_names,
            used_packages,
            graph,
            warnings,
        }
    }
}

/// Analyze one file: parse, collect imports/declarations/usages, resolve
/// specifiers. Parse failures degrade to the regex fallback instead of
/// aborting the run.
fn analyze_file(
    parser: &mut SourceParser,
    resolver: &ModuleResolver,
    config: &Config,
    file: &SourceFile,
    contents: &str,
) -> FileAnalysis {
    let path = lexical_canonical(&file.path);
    let containing_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));
    let filename_ignored = config.is_ignored_filename(&path);

    let mut analysis = FileAnalysis {
        path: path.clone(),
        ..FileAnalysis::default()
    };

    let raw_imports = match parser.parse(contents) {
        Some(attempt) if attempt.clean => {
            let root = attempt.tree.root_node();

            // Filename-ignored files still contribute import and usage
            // evidence; only their declarations are out of the universe.
            if !filename_ignored {
                analysis.declarations = collect_declarations(root, contents, &path);
            }
            analysis.usages = collect_usages(root, contents);
            collect_imports(root, contents)
        }
        _ => {
            debug!("Parse failed, regex fallback: {}", path.display());
            analysis.fallback = true;
            scan_imports_fallback(contents)
        }
    };

    for import in raw_imports {
        match resolver.resolve(&import.specifier, &containing_dir) {
            Resolution::Module(target) => {
                analysis.module_refs.push((target, import.specifier));
            }
            Resolution::Package(name) => {
                analysis.used_packages.insert(name);
            }
            Resolution::Unresolved => {
                // absence is a normal outcome and contributes nothing
            }
        }
    }

    analysis
}

fn partition_ignored(config: &Config, files: &[SourceFile]) -> (Vec<PathBuf>, HashSet<PathBuf>) {
    let canonical: Vec<PathBuf> = files.iter().map(|f| lexical_canonical(&f.path)).collect();
    let ignored = canonical
        .iter()
        .filter(|p| config.is_ignored_filename(p))
        .cloned()
        .collect();
    (canonical, ignored)
}

/// Sequential corpus builder
pub struct CorpusBuilder<'a> {
    config: &'a Config,
    resolver: ModuleResolver,
    parser: SourceParser,
    files: Vec<PathBuf>,
    ignored_files: HashSet<PathBuf>,
    analyses: Vec<FileAnalysis>,
    warnings: Vec<FileWarning>,
}

impl<'a> CorpusBuilder<'a> {
    pub fn new(config: &'a Config, project_root: &Path) -> Self {
        Self {
            config,
            resolver: ModuleResolver::new(
                project_root,
                &config.alias.marker,
                &config.alias.root,
            ),
            parser: SourceParser::new(),
            files: Vec::new(),
            ignored_files: HashSet::new(),
            analyses: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Swap the resolver (used by tests to inject an existence probe)
    pub fn with_resolver(mut self, resolver: ModuleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Process a single source file
    pub fn process_file(&mut self, file: &SourceFile) -> Result<()> {
        let canonical = lexical_canonical(&file.path);
        self.files.push(canonical.clone());
        if self.config.is_ignored_filename(&canonical) {
            self.ignored_files.insert(canonical);
        }

        match file.read_contents() {
            Ok(contents) => {
                let analysis =
                    analyze_file(&mut self.parser, &self.resolver, self.config, file, &contents);
                self.analyses.push(analysis);
            }
            Err(e) => {
                self.warnings.push(FileWarning {
                    file: file.path.clone(),
                    message: format!("could not be read: {}", e),
                });
            }
        }

        Ok(())
    }

    /// Merge all per-file outputs into the corpus
    pub fn build(self) -> Corpus {
        Corpus::from_parts(self.files, self.ignored_files, self.analyses, self.warnings)
    }
}

/// Parallel corpus builder using rayon
pub struct ParallelCorpusBuilder<'a> {
    config: &'a Config,
    resolver: ModuleResolver,
}

impl<'a> ParallelCorpusBuilder<'a> {
    pub fn new(config: &'a Config, project_root: &Path) -> Self {
        Self {
            config,
            resolver: ModuleResolver::new(
                project_root,
                &config.alias.marker,
                &config.alias.root,
            ),
        }
    }

    /// Swap the resolver (used by tests to inject an existence probe)
    pub fn with_resolver(mut self, resolver: ModuleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Analyze all files in parallel, merging at a single point
    pub fn build_from_files(&self, files: &[SourceFile]) -> Result<Corpus> {
        info!("Analyzing {} files in parallel...", files.len());

        let (canonical, ignored) = partition_ignored(self.config, files);

        let mut warnings = Vec::new();
        let results: Vec<std::result::Result<FileAnalysis, FileWarning>> = files
            .par_iter()
            .map(|file| {
                let contents = file.read_contents().map_err(|e| FileWarning {
                    file: file.path.clone(),
                    message: format!("could not be read: {}", e),
                })?;
                let mut parser = SourceParser::new();
                Ok(analyze_file(
                    &mut parser,
                    &self.resolver,
                    self.config,
                    file,
                    &contents,
                ))
            })
            .collect();

        let mut analyses = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(analysis) => analyses.push(analysis),
                Err(warning) => {
                    debug!("Read error (continuing): {}", warning.message);
                    warnings.push(warning);
                }
            }
        }

        Ok(Corpus::from_parts(canonical, ignored, analyses, warnings))
    }
}
