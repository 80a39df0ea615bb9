//! Seogate: a CI-friendly SEO audit gate
//!
//! This crate audits one or more HTML pages for SEO fundamentals and produces
//! a deterministic 0-100 score plus a list of actionable findings. It crawls
//! a bounded same-origin page set, runs a fixed battery of rule checks against
//! each page, probes site-level reachability signals, and aggregates everything
//! into a single report.

pub mod aggregate;
pub mod audit;
pub mod config;
pub mod crawler;
pub mod input;
pub mod model;
pub mod output;
pub mod runner;
pub mod site;

use thiserror::Error;

/// Main error type for seogate operations
#[derive(Debug, Error)]
pub enum SeoGateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Target is neither a valid http(s) URL nor an existing path: {0}")]
    InvalidTarget(String),

    #[error("No pages could be resolved or audited for {target}")]
    EmptyPageSet { target: String },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for seogate operations
pub type Result<T> = std::result::Result<T, SeoGateError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use aggregate::aggregate;
pub use audit::audit_page;
pub use config::Config;
pub use model::{Category, Finding, PageAuditResult, Report, Severity};
pub use runner::{resolve_target, run_audit, AuditTarget};
pub use site::SiteSignals;
