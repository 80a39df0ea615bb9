//! Seogate main entry point
//!
//! Command-line interface for the SEO audit gate. Exit codes are the CI
//! contract: 0 when the score meets the threshold, 1 when it falls short,
//! 2 when no pages could be resolved or the invocation itself was invalid.

use clap::Parser;
use seogate::config::{load_config, Config};
use seogate::output::{write_report, ReportFormat};
use seogate::runner::run_audit;
use seogate::SeoGateError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Seogate: a CI-friendly SEO audit gate
///
/// Audits a website (bounded same-origin crawl) or a local HTML file or
/// directory, scores it 0-100 against five weighted SEO categories, and
/// exits non-zero when the score misses the configured threshold.
#[derive(Parser, Debug)]
#[command(name = "seogate")]
#[command(version)]
#[command(about = "CI-friendly SEO audit gate", long_about = None)]
struct Cli {
    /// Audit target: an http(s) URL, an HTML file, or a directory
    #[arg(value_name = "TARGET")]
    target: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of pages to fetch and audit
    #[arg(long)]
    budget: Option<usize>,

    /// Minimum score required for exit code 0
    #[arg(long)]
    threshold: Option<u32>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    std::process::exit(run(cli).await);
}

/// Runs the audit and maps the outcome to the exit-code contract
async fn run(cli: Cli) -> i32 {
    let mut config = match load_cli_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return 2;
        }
    };

    // CLI flags override file/default values.
    if let Some(budget) = cli.budget {
        config.crawler.page_budget = budget;
    }
    if let Some(threshold) = cli.threshold {
        config.scoring.threshold = threshold;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.display().to_string());
    }
    if let Err(e) = seogate::config::validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return 2;
    }

    let report = match run_audit(&config, &cli.target).await {
        Ok(report) => report,
        Err(SeoGateError::EmptyPageSet { target }) => {
            tracing::error!("No pages could be resolved or audited for {}", target);
            return 2;
        }
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            return 2;
        }
    };

    let path = config.output.path.as_deref().map(std::path::Path::new);
    if let Err(e) = write_report(&report, config.output.format, path) {
        tracing::error!("Failed to write report: {}", e);
        return 2;
    }

    if report.score >= config.scoring.threshold {
        tracing::info!(
            "Score {} meets threshold {}",
            report.score,
            config.scoring.threshold
        );
        0
    } else {
        tracing::warn!(
            "Score {} below threshold {}",
            report.score,
            config.scoring.threshold
        );
        1
    }
}

/// Loads the config file when given, or the built-in defaults
fn load_cli_config(cli: &Cli) -> Result<Config, seogate::ConfigError> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            load_config(path)
        }
        None => Ok(Config::default()),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seogate=info,warn"),
            1 => EnvFilter::new("seogate=debug,info"),
            2 => EnvFilter::new("seogate=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
