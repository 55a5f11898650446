//! fsd-harvest main entry point
//!
//! This is the command-line interface for the directory harvester. By
//! default it crawls the directory once, writes the dataset, then serves it.

use anyhow::Context;
use clap::Parser;
use fsd_harvest::config::{load_config, load_default_config, Config};
use fsd_harvest::crawler::crawl;
use fsd_harvest::dataset::{open_store, DatasetStore};
use fsd_harvest::server::{serve, SCRAPED_DATA_PATH};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// fsd-harvest: a directory site harvester
///
/// Crawls every category of a community directory, extracts one record per
/// listed organization into a JSON dataset, and serves that dataset over
/// HTTP.
#[derive(Parser, Debug)]
#[command(name = "fsd-harvest")]
#[command(version)]
#[command(about = "Harvests a community directory and serves it as JSON", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with_all = ["crawl_only", "serve_only"])]
    dry_run: bool,

    /// Crawl and write the dataset, then exit without serving
    #[arg(long, conflicts_with_all = ["dry_run", "serve_only"])]
    crawl_only: bool,

    /// Serve the existing dataset without crawling first
    #[arg(long, conflicts_with_all = ["dry_run", "crawl_only"])]
    serve_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            load_default_config().context("Built-in configuration is invalid")?
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let store: Arc<dyn DatasetStore> = Arc::new(open_store(&config.output));

    if !cli.serve_only {
        handle_crawl(&config, store.as_ref()).await?;
    }

    if !cli.crawl_only {
        serve(&config.server, store).await.context("Server error")?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fsd_harvest=info,warn"),
            1 => EnvFilter::new("fsd_harvest=debug,tower_http=debug,info"),
            2 => EnvFilter::new("fsd_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled and served
fn handle_dry_run(config: &Config) {
    println!("=== fsd-harvest Dry Run ===\n");

    println!("Site:");
    println!("  Landing page: {}", config.site.base_url);

    println!("\nSelectors:");
    println!("  Category block class: {}", config.selectors.category_block_class);
    println!("  Category link marker: {}", config.selectors.category_link_marker);
    println!("  Results container id: {}", config.selectors.result_container_id);
    println!("  Result hit class: {}", config.selectors.result_hit_class);
    println!("  Next page class: {}", config.selectors.next_page_class);
    println!("  Venue section class: {}", config.selectors.venue_section_class);
    println!("  Description class: {}", config.selectors.description_class);

    println!("\nCrawler:");
    println!(
        "  Stop on repeated page: {}",
        config.crawler.stop_on_repeated_page
    );

    println!("\nOutput:");
    println!("  Dataset: {}", config.output.dataset_path);

    println!("\nServer:");
    println!(
        "  Endpoint: http://{}{}",
        config.server.bind_address, SCRAPED_DATA_PATH
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the crawl: walks the whole site and replaces the dataset
async fn handle_crawl(config: &Config, store: &dyn DatasetStore) -> anyhow::Result<()> {
    tracing::info!("Starting crawl from {}", config.site.base_url);

    match crawl(config, store).await {
        Ok(outcome) => {
            tracing::info!(
                "Crawl completed: {} organizations from {} categories ({} listing pages)",
                outcome.organizations.len(),
                outcome.categories,
                outcome.pages_visited
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e).context("Crawl failed")
        }
    }
}
