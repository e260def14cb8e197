// Analysis module - some helpers reserved for future use
#![allow(dead_code)]

mod corpus;
mod unused;

pub use corpus::{Corpus, CorpusBuilder, FileAnalysis, FileWarning, ParallelCorpusBuilder};
pub use unused::UnusedAnalyzer;

use crate::parser::Declaration;
use std::path::PathBuf;

/// Class of dead weight a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// Declared package dependency never imported
    UnusedDependency,

    /// Named declaration never referenced
    UnusedFunction,

    /// Source file never imported by any other file
    UnusedFile,
}

impl FindingKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            FindingKind::UnusedDependency => "unused dependency",
            FindingKind::UnusedFunction => "unused function",
            FindingKind::UnusedFile => "unused file",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::UnusedDependency => "DW001",
            FindingKind::UnusedFunction => "DW002",
            FindingKind::UnusedFile => "DW003",
        }
    }
}

/// A single dead-weight finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,

    /// Package name, function name, or file path rendered as a name
    pub name: String,

    /// Owning file for function findings, the file itself for file findings
    pub file: Option<PathBuf>,

    /// Declaration line for function findings
    pub line: Option<usize>,

    /// Declaration kind for function findings
    pub detail: Option<&'static str>,
}

impl Finding {
    pub fn dependency(name: &str) -> Self {
        Self {
            kind: FindingKind::UnusedDependency,
            name: name.to_string(),
            file: None,
            line: None,
            detail: None,
        }
    }

    pub fn function(declaration: &Declaration) -> Self {
        Self {
            kind: FindingKind::UnusedFunction,
            name: declaration.name.clone(),
            file: Some(declaration.file.clone()),
            line: Some(declaration.line),
            detail: Some(declaration.kind.display_name()),
        }
    }

    pub fn file(path: &std::path::Path) -> Self {
        Self {
            kind: FindingKind::UnusedFile,
            name: path.display().to_string(),
            file: Some(path.to_path_buf()),
            line: None,
            detail: None,
        }
    }
}

/// Result of one analysis run
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub findings: Vec<Finding>,

    /// True when no manifest was found and the dependency report carries no
    /// information (as opposed to "clean")
    pub dependency_analysis_skipped: bool,

    /// Number of source files scanned
    pub files_scanned: usize,

    /// Per-file warnings collected during parsing
    pub warnings: Vec<FileWarning>,
}

impl Report {
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    pub fn count_of(&self, kind: FindingKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
