//! deadweight - find unused dependencies, functions and files in
//! JavaScript/TypeScript projects
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all .js, .jsx, .ts and .tsx files
//! 2. **Manifest** - Read the declared dependency names from package.json
//! 3. **Per-file analysis** - Parse each file with tree-sitter, collect
//!    import specifiers, named declarations and identifier usage
//! 4. **Resolution** - Map each specifier to a local file, a package name,
//!    or nothing
//! 5. **Corpus merge** - Join all per-file outputs at a single point
//! 6. **Unused analysis** - Compute the three unused-sets by difference
//! 7. **Reporting** - Output results to the terminal or as JSON

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod graph;
pub mod manifest;
pub mod parser;
pub mod report;
pub mod resolver;

pub use analysis::{
    Corpus, CorpusBuilder, Finding, FindingKind, ParallelCorpusBuilder, Report, UnusedAnalyzer,
};
pub use config::Config;
pub use discovery::{FileFinder, FileKind, SourceFile};
pub use graph::ModuleGraph;
pub use manifest::{DependencyUniverse, ManifestError, PackageManifest};
pub use report::{Reporter, ReportFormat};
pub use resolver::{ModuleResolver, Resolution};
