use arachnida_core::{
    is_image_url, resolve_reference, Admission, CrawlConfig, CrawlTask, Frontier, VisitedSet,
};
use crawl_logging::{crawl_debug, crawl_info};
use thiserror::Error;
use url::Url;

use crate::decode::decode_html;
use crate::extract::{DomExtractor, Extractor, PageRefs};
use crate::filename::image_filename;
use crate::persist::{ImageStore, PersistError, SaveOutcome};
use crate::{CrawlEvent, CrawlSink, FetchError, Fetcher};

/// Conditions that end a run. Everything else is reported as a `CrawlEvent`.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("cannot prepare output directory: {0}")]
    Output(#[from] PersistError),
    #[error("unable to access {url}: {source}")]
    Seed {
        url: String,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub pages_visited: usize,
    pub images_saved: usize,
    pub duplicates_skipped: usize,
    pub non_images_skipped: usize,
    pub failures: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlOutcome {
    Completed(CrawlSummary),
    /// Single-page mode found no `<img>` on the seed; nothing was written.
    NoImages { url: String },
}

/// Crawl controller for one invocation: owns the visited set, the depth
/// bound and the output directory.
pub struct Crawler {
    config: CrawlConfig,
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    store: ImageStore,
    visited: VisitedSet,
    summary: CrawlSummary,
}

impl Crawler {
    /// Creates the output directory up front; failure there is fatal.
    pub fn new(config: CrawlConfig, fetcher: impl Fetcher + 'static) -> Result<Self, CrawlError> {
        let store = ImageStore::open(config.output_dir.clone())?;
        Ok(Self {
            config,
            fetcher: Box::new(fetcher),
            extractor: Box::new(DomExtractor),
            store,
            visited: VisitedSet::new(),
            summary: CrawlSummary::default(),
        })
    }

    pub fn with_extractor(mut self, extractor: impl Extractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub async fn run(&mut self, sink: &dyn CrawlSink) -> Result<CrawlOutcome, CrawlError> {
        if self.config.recursive {
            self.recursive_scrape(sink)
                .await
                .map(CrawlOutcome::Completed)
        } else {
            self.scrape_seed(sink).await
        }
    }

    /// Single-page mode: download the seed's images and stop.
    pub async fn scrape_seed(&mut self, sink: &dyn CrawlSink) -> Result<CrawlOutcome, CrawlError> {
        let seed = self.config.seed.clone();
        let refs = self.load_page(&seed).await.map_err(|source| CrawlError::Seed {
            url: seed.to_string(),
            source,
        })?;
        self.summary.pages_visited += 1;

        if refs.images.is_empty() {
            sink.emit(CrawlEvent::NoImages {
                url: seed.to_string(),
            });
            return Ok(CrawlOutcome::NoImages {
                url: seed.to_string(),
            });
        }
        self.scrape_images(&seed, &refs.images, sink).await;
        Ok(CrawlOutcome::Completed(self.summary.clone()))
    }

    /// Depth-first traversal of same-domain links from the seed.
    ///
    /// The seed failing to load is fatal; any other page failing only ends
    /// its own branch.
    pub async fn recursive_scrape(
        &mut self,
        sink: &dyn CrawlSink,
    ) -> Result<CrawlSummary, CrawlError> {
        let mut frontier = Frontier::new(self.config.seed.clone(), self.config.max_depth);

        while let Some(admission) = frontier.pop() {
            let task = match admission {
                Admission::Visit(task) => task,
                Admission::AlreadyVisited(task) => {
                    sink.emit(CrawlEvent::AlreadyVisited {
                        url: task.url.to_string(),
                    });
                    continue;
                }
            };
            sink.emit(CrawlEvent::PageVisited {
                url: task.url.to_string(),
                depth: task.depth,
            });
            self.summary.pages_visited += 1;

            let refs = match self.load_page(&task.url).await {
                Ok(refs) => refs,
                Err(source) if task.depth == 0 => {
                    self.visited = frontier.into_visited();
                    return Err(CrawlError::Seed {
                        url: task.url.to_string(),
                        source,
                    });
                }
                Err(error) => {
                    self.summary.failures += 1;
                    sink.emit(CrawlEvent::PageFailed {
                        url: task.url.to_string(),
                        error,
                    });
                    continue;
                }
            };

            if refs.images.is_empty() {
                sink.emit(CrawlEvent::NoImages {
                    url: task.url.to_string(),
                });
            } else {
                self.scrape_images(&task.url, &refs.images, sink).await;
            }
            self.schedule_links(&mut frontier, &task, &refs.links);
        }

        self.visited = frontier.into_visited();
        crawl_info!(
            "Crawl of {} finished: {} page(s) visited",
            self.config.seed,
            self.visited.len()
        );
        Ok(self.summary.clone())
    }

    fn schedule_links(&self, frontier: &mut Frontier, task: &CrawlTask, links: &[String]) {
        let resolved = links
            .iter()
            .filter_map(|href| resolve_reference(&task.url, href));
        let scheduled = frontier.extend(task, resolved);
        crawl_debug!(
            "{}: {} link(s) found, {} scheduled",
            task.url,
            links.len(),
            scheduled
        );
    }

    async fn load_page(&self, url: &Url) -> Result<PageRefs, FetchError> {
        let output = self.fetcher.fetch(url.as_str()).await?;
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref());
        if decoded.had_errors {
            crawl_debug!(
                "{} contained bytes invalid in {}; replaced",
                url,
                decoded.encoding_label
            );
        }
        Ok(self.extractor.extract(&decoded.html))
    }

    async fn scrape_images(&mut self, page: &Url, images: &[String], sink: &dyn CrawlSink) {
        for src in images {
            let Some(image_url) = resolve_reference(page, src) else {
                continue;
            };
            if !is_image_url(&image_url) {
                self.summary.non_images_skipped += 1;
                sink.emit(CrawlEvent::NonImageSkipped {
                    url: image_url.to_string(),
                });
                continue;
            }
            self.download_image(&image_url, sink).await;
        }
    }

    async fn download_image(&mut self, url: &Url, sink: &dyn CrawlSink) {
        let output = match self.fetcher.fetch(url.as_str()).await {
            Ok(output) => output,
            Err(error) => {
                self.summary.failures += 1;
                sink.emit(CrawlEvent::ImageFailed {
                    url: url.to_string(),
                    reason: error.to_string(),
                });
                return;
            }
        };

        let filename = image_filename(url);
        match self.store.save(&filename, &output.bytes) {
            Ok(SaveOutcome::Written(path)) => {
                self.summary.images_saved += 1;
                sink.emit(CrawlEvent::ImageSaved {
                    url: url.to_string(),
                    path,
                });
            }
            Ok(SaveOutcome::Duplicate(path)) => {
                self.summary.duplicates_skipped += 1;
                sink.emit(CrawlEvent::DuplicateSkipped {
                    url: url.to_string(),
                    path,
                });
            }
            Err(err) => {
                self.summary.failures += 1;
                sink.emit(CrawlEvent::ImageFailed {
                    url: url.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
}
