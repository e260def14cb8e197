// Configuration loader - some methods reserved for future use
#![allow(dead_code)]

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a deadweight analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Patterns to exclude from file discovery
    pub exclude: Vec<String>,

    /// Filenames that are never analyzed as declarations or reported as
    /// unused files (framework conventions like middleware and layouts)
    pub ignored_filenames: Vec<String>,

    /// Path prefixes (relative to the project root) whose files are loaded
    /// by framework convention and exempt from unused-file findings
    pub entry_prefixes: Vec<String>,

    /// Import alias configuration
    pub alias: AliasConfig,

    /// Whether devDependencies count toward the declared dependency universe
    pub include_dev_dependencies: bool,

    /// Report configuration
    pub report: ReportConfig,
}

/// Alias import configuration (e.g. `@/components/Button` -> `src/components/Button`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    /// Prefix marker that designates an aliased specifier
    pub marker: String,

    /// Directory under the project root the marker maps to
    pub root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,

    /// Show line numbers for function findings
    pub show_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/.next/**".to_string(),
                "**/dist/**".to_string(),
                "**/build/**".to_string(),
                "**/coverage/**".to_string(),
            ],
            ignored_filenames: vec![
                "middleware.ts".to_string(),
                "layout.tsx".to_string(),
                "global.css".to_string(),
                "template.tsx".to_string(),
            ],
            entry_prefixes: vec!["src/app".to_string()],
            alias: AliasConfig::default(),
            include_dev_dependencies: true,
            report: ReportConfig::default(),
        }
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            marker: "@/".to_string(),
            root: "src".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            show_lines: true,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".deadweight.yml",
            ".deadweight.yaml",
            ".deadweight.toml",
            "deadweight.yml",
            "deadweight.yaml",
            "deadweight.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a pattern matches for exclusion
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }

    /// Check if a file is on the fixed ignore-by-filename list
    pub fn is_ignored_filename(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| self.ignored_filenames.iter().any(|i| i == name))
            .unwrap_or(false)
    }

    /// Check if a file lies under a framework-entry prefix of the root
    pub fn is_entry_exempt(&self, path: &Path, project_root: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(project_root) else {
            return false;
        };
        self.entry_prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix))
    }
}

/// Simple glob matching for patterns like "*.test.ts" or "**/node_modules/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    // Handle simple wildcard patterns
    if pattern.starts_with('*') && !pattern.contains('/') {
        // Pattern like "*.spec.ts" matches "button.spec.ts"
        let suffix = &pattern[1..];
        return text.ends_with(suffix);
    }

    if pattern.ends_with('*') && !pattern.contains('/') {
        // Pattern like "legacy_*" matches "legacy_api.ts"
        let prefix = &pattern[..pattern.len() - 1];
        return text.starts_with(prefix);
    }

    // Handle path patterns with **
    if pattern.contains("**") {
        let cleaned = pattern.replace("**/", "").replace("/**", "");

        // If pattern is like "**/dist/**", check if "/dist/" is in the path
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = cleaned.trim_matches('/');
            // Must match as a complete directory name, not substring
            let dir_pattern = format!("/{}/", dir_name);
            return text.contains(&dir_pattern);
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true; // Pattern is just "**"
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    // Exact match
    text == pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_glob_match_suffix() {
        assert!(glob_match("*.spec.ts", "button.spec.ts"));
        assert!(glob_match("*.spec.ts", "form.spec.ts"));
        assert!(!glob_match("*.spec.ts", "spec.helpers.ts"));
    }

    #[test]
    fn test_glob_match_path() {
        assert!(glob_match("**/node_modules/**", "/app/node_modules/react/index.js"));
        assert!(glob_match("**/dist/**", "web/dist/bundle.js"));
        assert!(!glob_match("**/dist/**", "/app/src/main.ts"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.include_dev_dependencies);
        assert_eq!(config.alias.marker, "@/");
        assert!(config.ignored_filenames.contains(&"layout.tsx".to_string()));
    }

    #[test]
    fn test_is_ignored_filename() {
        let config = Config::default();
        assert!(config.is_ignored_filename(Path::new("/app/src/middleware.ts")));
        assert!(config.is_ignored_filename(Path::new("src/app/layout.tsx")));
        assert!(!config.is_ignored_filename(Path::new("src/app/page.tsx")));
    }

    #[test]
    fn test_is_entry_exempt() {
        let config = Config::default();
        let root = PathBuf::from("/app");
        assert!(config.is_entry_exempt(Path::new("/app/src/app/page.tsx"), &root));
        assert!(config.is_entry_exempt(Path::new("/app/src/app/blog/page.tsx"), &root));
        assert!(!config.is_entry_exempt(Path::new("/app/src/util/helper.ts"), &root));
        // A sibling of the prefix must not match
        assert!(!config.is_entry_exempt(Path::new("/app/src/application/x.ts"), &root));
    }
}
