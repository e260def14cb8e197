use crate::analysis::{FindingKind, Report};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
    project_root: PathBuf,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>, project_root: PathBuf) -> Self {
        Self {
            output_path,
            project_root,
        }
    }

    pub fn report(&self, report: &Report) -> Result<()> {
        let json_report = JsonReport::from_report(report, &self.project_root);
        let json = serde_json::to_string_pretty(&json_report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    files_scanned: usize,
    dependency_analysis_skipped: bool,
    unused_dependencies: Vec<String>,
    unused_functions: Vec<JsonFunction>,
    unused_files: Vec<String>,
    warnings: Vec<JsonWarning>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFunction {
    name: String,
    kind: Option<&'static str>,
    file: String,
    line: Option<usize>,
}

#[derive(Serialize)]
struct JsonWarning {
    file: String,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    unused_dependencies: usize,
    unused_functions: usize,
    unused_files: usize,
    total: usize,
}

impl JsonReport {
    fn from_report(report: &Report, project_root: &Path) -> Self {
        let relative = |path: &Path| -> String {
            path.strip_prefix(project_root)
                .unwrap_or(path)
                .display()
                .to_string()
        };

        let unused_dependencies: Vec<String> = report
            .of_kind(FindingKind::UnusedDependency)
            .map(|f| f.name.clone())
            .collect();

        let unused_functions: Vec<JsonFunction> = report
            .of_kind(FindingKind::UnusedFunction)
            .map(|f| JsonFunction {
                name: f.name.clone(),
                kind: f.detail,
                file: f.file.as_deref().map(relative).unwrap_or_default(),
                line: f.line,
            })
            .collect();

        let unused_files: Vec<String> = report
            .of_kind(FindingKind::UnusedFile)
            .filter_map(|f| f.file.as_deref().map(relative))
            .collect();

        let warnings: Vec<JsonWarning> = report
            .warnings
            .iter()
            .map(|w| JsonWarning {
                file: relative(&w.file),
                message: w.message.clone(),
            })
            .collect();

        let summary = JsonSummary {
            unused_dependencies: unused_dependencies.len(),
            unused_functions: unused_functions.len(),
            unused_files: unused_files.len(),
            total: report.findings.len(),
        };

        Self {
            version: "1.0",
            files_scanned: report.files_scanned,
            dependency_analysis_skipped: report.dependency_analysis_skipped,
            unused_dependencies,
            unused_functions,
            unused_files,
            warnings,
            summary,
        }
    }
}
