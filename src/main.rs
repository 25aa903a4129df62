//! Pubharvest main entry point
//!
//! This is the command-line interface for the pubharvest PubMed
//! foreign-language article harvester.

use anyhow::Context;
use clap::Parser;
use pubharvest::config::{load_config, validate, CrawlConfig, OutputConfig, PageRange, SearchConfig};
use pubharvest::crawler::{build_search_url, Harvester, PUBMED_BASE_URL};
use pubharvest::output::write_csv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pubharvest: a PubMed foreign-language article harvester
///
/// Pubharvest searches PubMed for a term restricted to one or more
/// non-English languages, walks a range of result pages, and writes the
/// article metadata it finds to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "pubharvest")]
#[command(version)]
#[command(about = "Harvest PubMed foreign-language article metadata to CSV", long_about = None)]
struct Cli {
    /// Search term
    #[arg(value_name = "TERM", required_unless_present = "config", conflicts_with = "config")]
    term: Option<String>,

    /// Language filter code (repeatable, e.g. -l chinese -l french)
    #[arg(short = 'l', long = "language", value_name = "CODE", conflicts_with = "config")]
    languages: Vec<String>,

    /// First results page to fetch
    #[arg(long, default_value_t = 1, conflicts_with = "config")]
    start_page: u32,

    /// Last results page to fetch
    #[arg(long, default_value_t = 10, conflicts_with = "config")]
    end_page: u32,

    /// Path of the CSV file to write
    #[arg(short, long, default_value = "data.csv", conflicts_with = "config")]
    output: PathBuf,

    /// Search a PubMed mirror instead of the main site
    #[arg(long, value_name = "URL", conflicts_with = "config")]
    base_url: Option<String>,

    /// Load the whole search from a TOML config file instead of flags
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Show the search URL and page plan without fetching anything
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).context("failed to load configuration")?
        }
        None => config_from_flags(&cli)?,
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pubharvest=info,warn"),
            1 => EnvFilter::new("pubharvest=debug,info"),
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

/// Builds a configuration from the CLI flags and validates it
fn config_from_flags(cli: &Cli) -> anyhow::Result<CrawlConfig> {
    let config = CrawlConfig {
        search: SearchConfig {
            // clap guarantees the term is present when no config file is given
            term: cli.term.clone().unwrap_or_default(),
            languages: cli.languages.clone(),
        },
        pages: PageRange {
            start: cli.start_page,
            end: cli.end_page,
        },
        output: OutputConfig {
            csv_path: cli.output.clone(),
        },
        base_url: cli
            .base_url
            .clone()
            .unwrap_or_else(|| PUBMED_BASE_URL.to_string()),
    };

    validate(&config).context("invalid search parameters")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &CrawlConfig) {
    let search_url = build_search_url(
        &config.base_url,
        &config.search.term,
        &config.search.languages,
    );
    let page_count = config.pages.end - config.pages.start + 1;

    println!("=== Pubharvest Dry Run ===\n");

    println!("Search:");
    println!("  Term: {}", config.search.term);
    println!("  Languages: {}", config.search.languages.join(", "));

    println!("\nPages: {}..{}", config.pages.start, config.pages.end);
    println!("Output: {}", config.output.csv_path.display());

    println!("\nSearch URL: {}<n>", search_url);

    println!("\n✓ Configuration is valid");
    println!("✓ Would fetch {} result page(s)", page_count);
}

/// Handles the main harvest operation
async fn handle_harvest(config: CrawlConfig) -> anyhow::Result<()> {
    tracing::info!(
        "Searching for \"{}\" in {} language(s), pages {}..{}",
        config.search.term,
        config.search.languages.len(),
        config.pages.start,
        config.pages.end
    );

    let csv_path = config.output.csv_path.clone();
    let harvester = Harvester::new(config)?;

    let records = match harvester.run().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Collected {} article record(s)", records.len());

    write_csv(&records, &csv_path)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    tracing::info!("Wrote {}", csv_path.display());

    Ok(())
}
