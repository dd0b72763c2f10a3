//! Configuration module for docmirror
//!
//! Handles loading, parsing, and validating TOML configuration files. Every
//! setting has a default taken from the reference deployment, so the binary
//! runs without any file at all; CLI flags override whatever was loaded.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, DEFAULT_SECTIONS};
pub use validation::validate;
