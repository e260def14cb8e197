use crate::analysis::{Finding, FindingKind, Report};
use colored::Colorize;
use miette::Result;
use std::path::{Path, PathBuf};

/// Terminal reporter with colored output
pub struct TerminalReporter {
    project_root: PathBuf,
}

impl TerminalReporter {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    pub fn report(&self, report: &Report) -> Result<()> {
        println!();
        self.print_warnings(report);
        self.print_dependencies(report);
        self.print_functions(report);
        self.print_files(report);
        self.print_summary(report);
        Ok(())
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }

    fn print_warnings(&self, report: &Report) {
        for warning in &report.warnings {
            println!(
                "{} {} {}",
                "warning:".yellow().bold(),
                self.relative(&warning.file).display(),
                warning.message.dimmed()
            );
        }
        if !report.warnings.is_empty() {
            println!();
        }
    }

    fn print_dependencies(&self, report: &Report) {
        if report.dependency_analysis_skipped {
            println!(
                "{}",
                "Dependency analysis skipped: package.json not found.".yellow()
            );
            println!();
            return;
        }

        let unused: Vec<&Finding> = report.of_kind(FindingKind::UnusedDependency).collect();
        if unused.is_empty() {
            println!("{}", "No unused dependencies found.".green());
        } else {
            println!(
                "{}",
                format!("Unused dependencies ({}):", unused.len()).yellow().bold()
            );
            for finding in unused {
                println!("  {} {}", "○".dimmed(), finding.name.red());
            }
        }
        println!();
    }

    fn print_functions(&self, report: &Report) {
        let unused: Vec<&Finding> = report.of_kind(FindingKind::UnusedFunction).collect();
        if unused.is_empty() {
            println!("{}", "No unused functions found.".green());
        } else {
            println!(
                "{}",
                format!("Unused functions ({}):", unused.len()).yellow().bold()
            );
            for finding in unused {
                let location = match (&finding.file, finding.line) {
                    (Some(file), Some(line)) => {
                        format!("{}:{}", self.relative(file).display(), line)
                    }
                    (Some(file), None) => self.relative(file).display().to_string(),
                    _ => String::new(),
                };
                let kind = finding.detail.unwrap_or("function");
                println!(
                    "  {} {} {}",
                    "○".dimmed(),
                    finding.name.red(),
                    format!("({}) in {}", kind, location).dimmed()
                );
            }
        }
        println!();
    }

    fn print_files(&self, report: &Report) {
        let unused: Vec<&Finding> = report.of_kind(FindingKind::UnusedFile).collect();
        if unused.is_empty() {
            println!("{}", "No unused files found.".green());
        } else {
            println!(
                "{}",
                format!("Unused files ({}):", unused.len()).yellow().bold()
            );
            for finding in unused {
                let display = finding
                    .file
                    .as_deref()
                    .map(|f| self.relative(f).display().to_string())
                    .unwrap_or_else(|| finding.name.clone());
                println!("  {} {}", "○".dimmed(), display.red());
            }
        }
        println!();
    }

    fn print_summary(&self, report: &Report) {
        println!("{}", "─".repeat(60).dimmed());

        if report.is_clean() && !report.dependency_analysis_skipped {
            println!(
                "{}",
                format!("✓ {} files scanned, no dead weight found", report.files_scanned).green()
            );
            return;
        }

        let mut parts = Vec::new();
        let deps = report.count_of(FindingKind::UnusedDependency);
        let functions = report.count_of(FindingKind::UnusedFunction);
        let files = report.count_of(FindingKind::UnusedFile);
        if deps > 0 {
            parts.push(format!("{} dependencies", deps));
        }
        if functions > 0 {
            parts.push(format!("{} functions", functions));
        }
        if files > 0 {
            parts.push(format!("{} files", files));
        }

        let summary = if parts.is_empty() {
            "no findings".to_string()
        } else {
            parts.join(", ")
        };
        println!(
            "Summary: {} unused ({} files scanned)",
            summary.yellow(),
            report.files_scanned
        );
    }
}
