#![deny(missing_docs)]
//! Logging front end for the arachnida crates.
//!
//! Library code logs through the `crawl_*` macros, which expand to the `log`
//! facade at the call site so the record target stays the calling module.
//! Installing a logger is left to the binaries and to
//! [`initialize_for_tests`].

/// Per-request detail, such as each GET and its byte count.
#[macro_export]
macro_rules! crawl_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Link counts and decoding notes that are noise at the default level.
#[macro_export]
macro_rules! crawl_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Progress the user sees by default: pages scraped, images saved.
#[macro_export]
macro_rules! crawl_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// A page or image that failed without stopping the crawl.
#[macro_export]
macro_rules! crawl_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// A failure that ends the run.
#[macro_export]
macro_rules! crawl_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Debug in debug builds, info in release builds.
pub fn default_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Sends log output of integration tests to the terminal.
///
/// Several tests in one binary may call this; only the first install wins.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .add_filter_allow_str("arachnida")
        .build();
    let _ = TermLogger::init(
        default_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
