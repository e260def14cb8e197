//! Import specifier resolution.
//!
//! Maps a raw specifier plus its containing directory to one of three
//! outcomes: a canonical local file, a normalized package name, or
//! unresolved. Resolution never fails; absence is a normal outcome.

// Some methods reserved for future use
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Outcome of resolving a raw import specifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A local source file, canonicalized
    Module(PathBuf),

    /// An external package, normalized to its registry name
    Package(String),

    /// Nothing on disk matched and the specifier is not a package
    Unresolved,
}

/// Extension probe order for extensionless relative/aliased specifiers
pub const EXTENSION_PROBES: [&str; 4] = [".tsx", ".ts", ".jsx", ".js"];

/// Probe the fixed extension list against a base path, accepting the first
/// candidate the predicate confirms.
///
/// Pure over the injected predicate so it is testable without a filesystem.
pub fn probe_extensions<F>(base: &Path, exists: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    EXTENSION_PROBES.iter().find_map(|ext| {
        let candidate = PathBuf::from(format!("{}{}", base.display(), ext));
        exists(&candidate).then_some(candidate)
    })
}

/// Normalize a package specifier to its registry name.
///
/// Scoped packages keep their first two path segments, unscoped packages
/// keep the first: `@scope/pkg/sub` -> `@scope/pkg`, `lodash/fp` -> `lodash`.
pub fn normalize_package(specifier: &str) -> String {
    let mut segments = specifier.split('/');
    match segments.next() {
        Some(scope) if scope.starts_with('@') => match segments.next() {
            Some(name) => format!("{}/{}", scope, name),
            None => scope.to_string(),
        },
        Some(first) if !first.is_empty() => first.to_string(),
        _ => specifier.to_string(),
    }
}

/// Lexically canonicalize a path: resolve `.` and `..` components and
/// normalize separators to `/`, without touching the filesystem.
///
/// Two syntactically different spellings of the same file compare equal
/// after this, so they collapse to one entry in the used-file set.
pub fn lexical_canonical(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy().replace('\\', "/");
    let absolute = raw.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(&"..")) || (parts.is_empty() && !absolute) {
                    parts.push("..");
                } else {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }

    let mut joined = parts.join("/");
    if absolute {
        joined.insert(0, '/');
    }
    PathBuf::from(joined)
}

/// Resolver for raw import specifiers found in source files
pub struct ModuleResolver {
    project_root: PathBuf,
    alias_marker: String,
    alias_root: String,
    exists: Box<dyn Fn(&Path) -> bool + Send + Sync>,
}

impl ModuleResolver {
    pub fn new(project_root: &Path, alias_marker: &str, alias_root: &str) -> Self {
        Self {
            project_root: lexical_canonical(project_root),
            alias_marker: alias_marker.to_string(),
            alias_root: alias_root.to_string(),
            exists: Box::new(|p: &Path| p.is_file()),
        }
    }

    /// Replace the existence probe (used by tests to resolve against a
    /// virtual tree)
    pub fn with_existence_probe<F>(mut self, exists: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.exists = Box::new(exists);
        self
    }

    /// Resolve a raw specifier found in a file under `containing_dir`
    pub fn resolve(&self, specifier: &str, containing_dir: &Path) -> Resolution {
        if specifier.starts_with('.') {
            self.resolve_local(containing_dir.join(specifier))
        } else if let Some(rest) = specifier.strip_prefix(self.alias_marker.as_str()) {
            self.resolve_local(self.project_root.join(&self.alias_root).join(rest))
        } else {
            Resolution::Package(normalize_package(specifier))
        }
    }

    fn resolve_local(&self, candidate: PathBuf) -> Resolution {
        let canonical = lexical_canonical(&candidate);

        // Literal path first, then the fixed extension probe order
        if (self.exists)(&canonical) {
            return Resolution::Module(canonical);
        }
        match probe_extensions(&canonical, |p| (self.exists)(p)) {
            Some(hit) => Resolution::Module(hit),
            None => Resolution::Unresolved,
        }
    }
}

impl std::fmt::Debug for ModuleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleResolver")
            .field("project_root", &self.project_root)
            .field("alias_marker", &self.alias_marker)
            .field("alias_root", &self.alias_root)
            .finish_non_exhaustive()
    }
}
