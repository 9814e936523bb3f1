use std::fmt;

use crawl_logging::{crawl_debug, crawl_error, crawl_info, crawl_trace, crawl_warn};
use log::Level;

use crate::CrawlEvent;

pub trait CrawlSink: Send + Sync {
    fn emit(&self, event: CrawlEvent);
}

/// Reports crawl events through the logging facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl CrawlSink for LogSink {
    fn emit(&self, event: CrawlEvent) {
        match event.level() {
            Level::Error => crawl_error!("{}", event),
            Level::Warn => crawl_warn!("{}", event),
            Level::Info => crawl_info!("{}", event),
            Level::Debug => crawl_debug!("{}", event),
            Level::Trace => crawl_trace!("{}", event),
        }
    }
}

impl CrawlEvent {
    /// Skips are notices the user sees by default; failures are warnings.
    pub fn level(&self) -> Level {
        match self {
            CrawlEvent::PageFailed { .. } | CrawlEvent::ImageFailed { .. } => Level::Warn,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for CrawlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlEvent::PageVisited { url, depth } => {
                write!(f, "Scraping {url} at depth {depth}")
            }
            CrawlEvent::AlreadyVisited { url } => write!(f, "Already visited {url}, skipping"),
            CrawlEvent::PageFailed { url, error } => write!(f, "Unable to access {url}: {error}"),
            CrawlEvent::NoImages { url } => write!(f, "No images found at {url}"),
            CrawlEvent::NonImageSkipped { url } => write!(f, "Skipping non-image URL: {url}"),
            CrawlEvent::ImageSaved { path, .. } => write!(f, "Downloaded: {}", path.display()),
            CrawlEvent::DuplicateSkipped { path, .. } => write!(
                f,
                "File {} already exists, skipping download",
                path.display()
            ),
            CrawlEvent::ImageFailed { url, reason } => {
                write!(f, "Failed to download {url}: {reason}")
            }
        }
    }
}
