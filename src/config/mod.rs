//! Configuration module
//!
//! Handles loading, parsing, and validating optional TOML configuration
//! files. Every section has defaults, so the tool runs without any config
//! file at all.
//!
//! # Example
//!
//! ```no_run
//! use seogate::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seogate.toml")).unwrap();
//! println!("Page budget: {}", config.crawler.page_budget);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, ScoringConfig, UserAgentConfig};
pub use validation::validate;
