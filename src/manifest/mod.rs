//! package.json reading.
//!
//! The engine only cares about the dependency key set; versions are read but
//! never interpreted.

// Some fields reserved for future use
#![allow(dead_code)]

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Errors that can occur while reading the dependency manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// No package.json at the project root
    #[error("package.json not found at {0}")]
    Missing(String),

    /// Failed to read the file from disk
    #[error("Failed to read package.json: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON content
    #[error("Failed to parse package.json: {0}")]
    Json(#[from] serde_json::Error),
}

/// The subset of package.json the analysis reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,

    #[serde(default)]
    pub dependencies: HashMap<String, String>,

    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// Parse a package.json from a string
    pub fn parse_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load the manifest from `<project_root>/package.json`
    pub fn load(project_root: &Path) -> Result<Self, ManifestError> {
        let path = project_root.join("package.json");
        if !path.is_file() {
            return Err(ManifestError::Missing(path.display().to_string()));
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::parse_str(&content)?)
    }

    /// The declared dependency name universe.
    ///
    /// Sorted so reports are deterministic across runs.
    pub fn declared_names(&self, include_dev: bool) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = self.dependencies.keys().cloned().collect();
        if include_dev {
            names.extend(self.dev_dependencies.keys().cloned());
        }
        names
    }
}

/// The dependency universe the reachability engine diffs against.
///
/// A missing manifest yields `skipped: true` rather than an empty universe,
/// so the dependency report reads "skipped" instead of silently "clean".
#[derive(Debug, Clone, Default)]
pub struct DependencyUniverse {
    pub declared: BTreeSet<String>,
    pub skipped: bool,
}

impl DependencyUniverse {
    pub fn from_manifest(manifest: &PackageManifest, include_dev: bool) -> Self {
        Self {
            declared: manifest.declared_names(include_dev),
            skipped: false,
        }
    }

    pub fn skipped() -> Self {
        Self {
            declared: BTreeSet::new(),
            skipped: true,
        }
    }
}
