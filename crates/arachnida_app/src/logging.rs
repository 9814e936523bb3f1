//! Logger initialization for the command-line tools.
//!
//! Terminal output is always on; a log file can be added with `--log-file`.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination {
    /// Terminal only: info on stdout, warnings and errors on stderr.
    Terminal,
    /// Terminal, but every level on stderr so stdout carries only results.
    Stderr,
    /// Terminal plus a file created (or truncated) at the given path.
    Both(PathBuf),
}

pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let mode = match destination {
        LogDestination::Stderr => TerminalMode::Stderr,
        _ => TerminalMode::Mixed,
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![TermLogger::new(level, config.clone(), mode, ColorChoice::Auto)];
    if let LogDestination::Both(path) = destination {
        if let Some(file_logger) = create_file_logger(&path, level, config) {
            loggers.push(file_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

/// Only our own crates log; HTTP and HTML parser internals stay quiet.
fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("arachnida")
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
