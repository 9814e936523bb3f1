use url::Url;

use crate::{CrawlTask, DomainScope, VisitedSet};

/// Outcome of taking the next task off the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// First time this URL is seen; it is now marked visited.
    Visit(CrawlTask),
    /// The URL was crawled earlier in this invocation.
    AlreadyVisited(CrawlTask),
}

/// Depth-first work stack for recursive crawls.
///
/// Children are pushed in reverse discovery order so that popping yields the
/// same preorder a recursive traversal would. Links outside the seed's domain
/// or beyond `max_depth` are never scheduled; visited checks happen on pop.
#[derive(Debug, Clone)]
pub struct Frontier {
    stack: Vec<CrawlTask>,
    visited: VisitedSet,
    scope: DomainScope,
    max_depth: usize,
}

impl Frontier {
    pub fn new(seed: Url, max_depth: usize) -> Self {
        let scope = DomainScope::from_seed(&seed);
        Self {
            stack: vec![CrawlTask::seed(seed)],
            visited: VisitedSet::new(),
            scope,
            max_depth,
        }
    }

    pub fn pop(&mut self) -> Option<Admission> {
        while let Some(task) = self.stack.pop() {
            if task.depth > self.max_depth {
                continue;
            }
            if self.visited.insert(task.key()) {
                return Some(Admission::Visit(task));
            }
            return Some(Admission::AlreadyVisited(task));
        }
        None
    }

    /// Schedule the links discovered on `parent`. Returns how many were kept.
    pub fn extend<I>(&mut self, parent: &CrawlTask, links: I) -> usize
    where
        I: IntoIterator<Item = Url>,
    {
        let depth = parent.depth + 1;
        if depth > self.max_depth {
            return 0;
        }
        let children: Vec<CrawlTask> = links
            .into_iter()
            .filter(|url| self.scope.contains(url))
            .map(|url| CrawlTask::new(url, depth))
            .collect();
        let count = children.len();
        self.stack.extend(children.into_iter().rev());
        count
    }

    pub fn into_visited(self) -> VisitedSet {
        self.visited
    }
}
