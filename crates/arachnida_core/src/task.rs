use url::Url;

use crate::urls::canonicalize;

/// A page scheduled for crawling. The seed has depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: Url,
    pub depth: usize,
}

impl CrawlTask {
    pub fn new(url: Url, depth: usize) -> Self {
        Self { url, depth }
    }

    pub fn seed(url: Url) -> Self {
        Self::new(url, 0)
    }

    /// Key used for visited-set membership.
    pub fn key(&self) -> String {
        canonicalize(&self.url)
    }
}
