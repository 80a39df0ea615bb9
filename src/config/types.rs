use crate::output::ReportFormat;
use serde::Deserialize;

/// Main configuration structure for seogate
///
/// Every section is optional; a missing config file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to fetch and audit
    #[serde(rename = "page-budget", default = "default_page_budget")]
    pub page_budget: usize,

    /// Per-request timeout (milliseconds)
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Politeness pause between consecutive fetches (milliseconds)
    #[serde(rename = "fetch-delay-ms", default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

/// Gate scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Minimum overall score for exit code 0
    #[serde(default)]
    pub threshold: u32,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the auditor bot
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// URL with information about the auditor
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

/// Report output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Report format (text, markdown, or json)
    #[serde(default)]
    pub format: ReportFormat,

    /// Report file path; stdout when absent
    #[serde(default)]
    pub path: Option<String>,
}

fn default_page_budget() -> usize {
    10
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_fetch_delay_ms() -> u64 {
    250
}

fn default_agent_name() -> String {
    "seogate".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_budget: default_page_budget(),
            timeout_ms: default_timeout_ms(),
            fetch_delay_ms: default_fetch_delay_ms(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { threshold: 0 }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!("{}/{} (+{})", self.name, env!("CARGO_PKG_VERSION"), contact),
            None => format!("{}/{}", self.name, env!("CARGO_PKG_VERSION")),
        }
    }
}
