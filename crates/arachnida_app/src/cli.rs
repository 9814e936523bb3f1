use std::path::PathBuf;

use arachnida_core::{CrawlConfig, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR};
use arachnida_engine::DEFAULT_REQUEST_TIMEOUT;
use clap::Parser;
use log::LevelFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "spider",
    version,
    about = "Download the images of a web page, optionally following same-host links"
)]
pub struct SpiderArgs {
    /// Page to start from (http or https)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Recursively download images from pages linked on the same host
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Maximum depth of the recursive download
    #[arg(short = 'l', value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Directory where downloaded images are saved
    #[arg(short = 'p', value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    pub path: PathBuf,

    /// Per-request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Also write the log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Also log link counts and decoding notes
    #[arg(short, long)]
    pub verbose: bool,
}

impl SpiderArgs {
    pub fn crawl_config(&self, seed: Url) -> CrawlConfig {
        let config = CrawlConfig::new(seed).with_output_dir(&self.path);
        if self.recursive {
            config.recursive(self.max_depth)
        } else {
            config
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "scorpion",
    version,
    about = "Report basic attributes of local image files"
)]
pub struct ScorpionArgs {
    /// One or more image files
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Print reports as a JSON array
    #[arg(long)]
    pub json: bool,
}
