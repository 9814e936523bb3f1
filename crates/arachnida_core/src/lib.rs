//! Arachnida core: pure crawl model (tasks, visited set, frontier, URL policy).
mod config;
mod frontier;
mod scope;
mod task;
mod urls;
mod visited;

pub use config::{CrawlConfig, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR};
pub use frontier::{Admission, Frontier};
pub use scope::DomainScope;
pub use task::CrawlTask;
pub use urls::{canonicalize, is_image_url, resolve_reference, IMAGE_EXTENSIONS};
pub use visited::VisitedSet;
