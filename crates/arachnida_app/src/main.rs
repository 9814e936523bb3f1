use std::process::ExitCode;

use arachnida_app::cli::SpiderArgs;
use arachnida_app::logging::{self, LogDestination};
use clap::Parser;

fn main() -> ExitCode {
    let args = SpiderArgs::parse();
    let destination = match &args.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    logging::initialize(destination, args.log_level());
    arachnida_app::spider::run(args)
}
