use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use arachnida_core::CrawlConfig;
use arachnida_engine::{CrawlOutcome, Crawler, FetchSettings, LogSink, ReqwestFetcher};
use crawl_logging::{crawl_error, crawl_info};
use url::Url;

use crate::cli::SpiderArgs;

/// Entry point for the `spider` binary. Fatal errors map to exit status 1.
pub fn run(args: SpiderArgs) -> ExitCode {
    match crawl(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crawl_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

pub fn parse_seed(raw: &str) -> Result<Url> {
    let seed = Url::parse(raw.trim()).with_context(|| format!("invalid URL '{raw}'"))?;
    if !matches!(seed.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}' in {}", seed.scheme(), seed);
    }
    Ok(seed)
}

fn crawl(args: &SpiderArgs) -> Result<()> {
    let config = args.crawl_config(parse_seed(&args.url)?);
    log_banner(&config);

    let settings = FetchSettings {
        request_timeout: Duration::from_secs(args.timeout),
        ..FetchSettings::default()
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let fetcher = ReqwestFetcher::new(settings).context("failed to build HTTP client")?;
        let mut crawler = Crawler::new(config, fetcher)?;
        match crawler.run(&LogSink).await? {
            CrawlOutcome::NoImages { url } => {
                crawl_info!("No images found at {}, nothing downloaded", url);
            }
            CrawlOutcome::Completed(summary) => {
                crawl_info!(
                    "Done: {} page(s) visited, {} image(s) saved, {} duplicate(s) skipped, {} failure(s)",
                    summary.pages_visited,
                    summary.images_saved,
                    summary.duplicates_skipped,
                    summary.failures
                );
            }
        }
        Ok(())
    })
}

fn log_banner(config: &CrawlConfig) {
    crawl_info!("Starting web scraper");
    crawl_info!("URL       : {}", config.seed);
    crawl_info!("Recursion : {}", config.recursive);
    crawl_info!("Max Depth : {}", config.max_depth);
    crawl_info!("Path      : {}", config.output_dir.display());
}
