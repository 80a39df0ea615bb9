//! Report output module
//!
//! Renders the final report as console text, a markdown summary, or the
//! stable JSON boundary shape, and writes it to stdout or a file.

mod json;
mod markdown;
mod text;

pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text;

use crate::model::Report;
use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable console summary
    #[default]
    Text,
    /// Markdown summary file
    Markdown,
    /// The stable Report JSON shape
    Json,
}

/// Renders a report in the requested format
pub fn render_report(report: &Report, format: ReportFormat) -> OutputResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Markdown => Ok(render_markdown(report)),
        ReportFormat::Json => Ok(render_json(report)?),
    }
}

/// Writes a rendered report to a file, or stdout when no path is given
pub fn write_report(
    report: &Report,
    format: ReportFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let rendered = render_report(report, format)?;
    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(rendered.as_bytes())?;
        }
        None => {
            println!("{}", rendered);
        }
    }
    Ok(())
}
