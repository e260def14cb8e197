use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

mod analysis;
mod config;
mod discovery;
mod graph;
mod manifest;
mod parser;
mod report;
mod resolver;

use analysis::{CorpusBuilder, ParallelCorpusBuilder, UnusedAnalyzer};
use config::Config;
use discovery::FileFinder;
use manifest::{DependencyUniverse, ManifestError, PackageManifest};
use report::Reporter;
use resolver::lexical_canonical;

/// deadweight - find unused dependencies, functions and files in
/// JavaScript/TypeScript projects
#[derive(Parser, Debug)]
#[command(name = "deadweight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Process files sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Exclude devDependencies from the declared dependency universe
    #[arg(long)]
    no_dev: bool,

    /// Exit with status 1 when findings are present
    #[arg(long)]
    fail_on_findings: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("deadweight v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let findings_present = run_analysis(&config, &cli)?;

    if cli.fail_on_findings && findings_present {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if cli.no_dev {
        config.include_dev_dependencies = false;
    }

    Ok(config)
}

/// Run the full pipeline; returns whether any findings were reported
fn run_analysis(config: &Config, cli: &Cli) -> Result<bool> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;

    let start_time = Instant::now();

    let project_root = lexical_canonical(
        &std::env::current_dir().into_diagnostic()?.join(&cli.path),
    );

    if !cli.quiet {
        println!(
            "{}",
            format!("Scanning directory: {}", project_root.display()).blue()
        );
    }

    // Step 1: Discover files
    info!("Discovering files...");
    let finder = FileFinder::new(config);
    let files = finder.find_files(&project_root)?;

    info!("Found {} files to analyze", files.len());

    if files.is_empty() {
        println!("{}", "No JavaScript or TypeScript files found.".yellow());
        return Ok(false);
    }

    // Step 2: Read the dependency manifest
    let dependencies = match PackageManifest::load(&project_root) {
        Ok(manifest) => DependencyUniverse::from_manifest(&manifest, config.include_dev_dependencies),
        Err(ManifestError::Missing(path)) => {
            eprintln!(
                "{}: {} - dependency analysis will be skipped",
                "Warning".yellow(),
                path
            );
            DependencyUniverse::skipped()
        }
        Err(e) => {
            eprintln!(
                "{}: {} - dependency analysis will be skipped",
                "Warning".yellow(),
                e
            );
            DependencyUniverse::skipped()
        }
    };

    // Step 3: Analyze files and merge into the corpus
    let corpus = if cli.sequential {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );

        info!("Analyzing files...");
        let mut builder = CorpusBuilder::new(config, &project_root);
        for file in &files {
            builder.process_file(file)?;
            pb.inc(1);
        }
        pb.finish_with_message("Analysis complete");

        builder.build()
    } else {
        if !cli.quiet {
            println!(
                "{}",
                format!("⚡ Analyzing {} files in parallel...", files.len()).cyan()
            );
        }
        let builder = ParallelCorpusBuilder::new(config, &project_root);
        builder.build_from_files(&files)?
    };

    // Step 4: Compute the three unused-sets
    info!("Computing unused sets...");
    let analyzer = UnusedAnalyzer::new(config, &project_root);
    let analysis_report = analyzer.analyze(&corpus, &dependencies);

    info!(
        "Found {} findings across {} files",
        analysis_report.findings.len(),
        analysis_report.files_scanned
    );

    // Step 5: Report results
    let reporter = Reporter::new(
        cli.format.clone().into(),
        cli.output.clone(),
        project_root.clone(),
    );
    reporter.report(&analysis_report)?;

    // Print timing
    let elapsed = start_time.elapsed();
    if !cli.quiet {
        println!(
            "{}",
            format!(
                "⏱  Analyzed {} files in {:.2}s",
                files.len(),
                elapsed.as_secs_f64()
            )
            .dimmed()
        );
    }

    Ok(!analysis_report.is_clean())
}
