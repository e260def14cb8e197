mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::analysis::Report;
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for presenting analysis results
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    project_root: PathBuf,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, project_root: PathBuf) -> Self {
        Self {
            format,
            output_path,
            project_root,
        }
    }

    /// Present the analysis report
    pub fn report(&self, report: &Report) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new(self.project_root.clone());
                reporter.report(report)
            }
            ReportFormat::Json => {
                let reporter =
                    JsonReporter::new(self.output_path.clone(), self.project_root.clone());
                reporter.report(report)
            }
        }
    }
}
