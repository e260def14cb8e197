// File discovery utilities - some reserved for future use
#![allow(dead_code)]

use crate::config::Config;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Kind of source file, determined by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl FileKind {
    /// Determine file kind from path
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension {
            "js" => Some(FileKind::JavaScript),
            "jsx" => Some(FileKind::Jsx),
            "ts" => Some(FileKind::TypeScript),
            "tsx" => Some(FileKind::Tsx),
            _ => None,
        }
    }

    /// Check if this kind carries typed syntax
    pub fn is_typescript(&self) -> bool {
        matches!(self, FileKind::TypeScript | FileKind::Tsx)
    }

    /// Check if this kind may carry markup syntax
    pub fn is_markup(&self) -> bool {
        matches!(self, FileKind::Jsx | FileKind::Tsx)
    }
}

/// A discovered source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Kind of source file
    pub kind: FileKind,
}

impl SourceFile {
    pub fn new(path: PathBuf, kind: FileKind) -> Self {
        Self { path, kind }
    }

    /// Load and return owned contents
    pub fn read_contents(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).into_diagnostic()
    }
}

/// File finder for discovering analyzable files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all source files under the given root.
    ///
    /// Returns an empty list (not an error) when nothing matches.
    pub fn find_files(&self, root: &Path) -> Result<Vec<SourceFile>> {
        debug!("Scanning for files in: {}", root.display());

        if !root.exists() {
            trace!("Root does not exist: {}", root.display());
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(root)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_global(true)       // Respect global gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(true)          // Check parent directories for ignore files
            .follow_links(false)    // Don't follow symlinks
            .build();

        let files: Vec<SourceFile> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();

                // The dependency cache is never analyzable, whatever the config says
                if path.components().any(|c| c.as_os_str() == "node_modules") {
                    return None;
                }

                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                let kind = FileKind::from_path(path)?;

                trace!("Found {:?}: {}", kind, path.display());
                Some(SourceFile::new(path.to_path_buf(), kind))
            })
            .collect();

        debug!("Found {} files", files.len());
        Ok(files)
    }
}

/// Statistics about discovered files
#[derive(Debug, Default)]
pub struct FileStats {
    pub js_files: usize,
    pub jsx_files: usize,
    pub ts_files: usize,
    pub tsx_files: usize,
}

impl FileStats {
    pub fn from_files(files: &[SourceFile]) -> Self {
        let mut stats = Self::default();
        for file in files {
            match file.kind {
                FileKind::JavaScript => stats.js_files += 1,
                FileKind::Jsx => stats.jsx_files += 1,
                FileKind::TypeScript => stats.ts_files += 1,
                FileKind::Tsx => stats.tsx_files += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.js_files + self.jsx_files + self.ts_files + self.tsx_files
    }
}
