use std::path::PathBuf;

use url::Url;

pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_OUTPUT_DIR: &str = "./data/";

/// Per-invocation crawl parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub seed: Url,
    pub recursive: bool,
    pub max_depth: usize,
    pub output_dir: PathBuf,
}

impl CrawlConfig {
    pub fn new(seed: Url) -> Self {
        Self {
            seed,
            recursive: false,
            max_depth: DEFAULT_MAX_DEPTH,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn recursive(mut self, max_depth: usize) -> Self {
        self.recursive = true;
        self.max_depth = max_depth;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
