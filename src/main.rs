//! Docmirror main entry point
//!
//! Command-line interface around the crawl core: loads configuration,
//! runs the crawl, decides on the offline fallback, and generates the
//! usage guide.

use anyhow::Context;
use clap::Parser;
use docmirror::config::{load_config, validate, Config};
use docmirror::crawler::Crawler;
use docmirror::output::{generate_instructions, write_demo_pages, PageStore};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Docmirror: mirror a documentation site into local HTML files
///
/// Crawls a single documentation site breadth-first, extracts the readable
/// content of every page, and stores self-contained HTML files plus a
/// machine-readable crawl summary and a generated usage guide.
#[derive(Parser, Debug)]
#[command(name = "docmirror")]
#[command(version = "1.0.0")]
#[command(about = "Mirror a documentation site into local HTML files", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the documentation site
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Page budget for this run
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Cooldown between requests, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Output directory for the mirrored pages
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Do not write offline placeholder pages when the crawl saves nothing
    #[arg(long)]
    no_fallback: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let output_dir = config.output.output_dir.clone();
    let base_url = Url::parse(&config.site.base_url).context("invalid base URL")?;

    let mut crawler = Crawler::new(config).context("failed to initialize crawler")?;
    let summary = crawler.start().await.context("crawl failed")?;

    println!("Crawl completed");
    println!("  Pages saved:     {}", summary.total_pages);
    println!("  Pages attempted: {}", summary.attempted_pages);
    println!("  Output:          {}", output_dir);

    if !summary.successful_crawl && !cli.no_fallback {
        tracing::warn!("No pages saved; writing offline placeholder content");
        let store = PageStore::new(Path::new(&output_dir))?;
        let written = write_demo_pages(&store, &base_url)?;
        println!("  Fallback pages:  {}", written.len());
    }

    let guide = generate_instructions(&summary, Path::new(&output_dir))?;
    println!("  Usage guide:     {}", guide.display());

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docmirror=info,warn"),
            1 => EnvFilter::new("docmirror=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loads the config file (or defaults) and applies CLI overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            load_config(path).context("failed to load configuration")?
        }
        None => Config::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.site.base_url = base_url.clone();
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.delay_ms = delay_ms;
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output.output_dir = output_dir.clone();
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}
