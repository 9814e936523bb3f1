//! Arachnida engine: fetching, extraction, image persistence and the crawl controller.
mod crawler;
mod decode;
mod extract;
mod fetch;
mod filename;
mod inspect;
mod persist;
mod sink;
mod types;

pub use crawler::{CrawlError, CrawlOutcome, CrawlSummary, Crawler};
pub use decode::{decode_html, DecodedHtml};
pub use extract::{DomExtractor, Extractor, PageRefs};
pub use fetch::{
    FetchSettings, Fetcher, ReqwestFetcher, BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE,
    BROWSER_USER_AGENT, DEFAULT_REQUEST_TIMEOUT,
};
pub use filename::{image_filename, numbered_variant, sanitize_filename};
pub use inspect::{
    has_image_extension, inspect_file, read_exif, ExifField, FileAttributes, ImageFormat,
    InspectError,
};
pub use persist::{ensure_output_dir, ImageStore, PersistError, SaveOutcome};
pub use sink::{CrawlSink, LogSink};
pub use types::{CrawlEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
