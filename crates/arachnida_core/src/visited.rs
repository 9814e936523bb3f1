use std::collections::HashSet;

/// URLs already crawled during one invocation. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` visited. Returns `false` if it was already present.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        self.urls.insert(url.into())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
