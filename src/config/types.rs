use serde::Deserialize;

/// Documentation sections seeded into the frontier, resolved against the
/// site's base URL. The site root itself is always seeded first.
pub const DEFAULT_SECTIONS: &[&str] = &[
    "/guide",
    "/tutorials",
    "/reference",
    "/api",
    "/cli",
    "/overview",
];

/// Main configuration structure for docmirror
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the documentation site, e.g. "https://angular.dev"
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Section entry points seeded in addition to the site root
    pub sections: Vec<String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Page budget: the crawl terminates once this many URLs were processed
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Cooldown between requests, in milliseconds
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the mirrored pages, summary, and log are written to
    #[serde(rename = "output-dir")]
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://angular.dev".to_string(),
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 200,
            delay_ms: 1000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: "./docs_mirror".to_string(),
        }
    }
}
