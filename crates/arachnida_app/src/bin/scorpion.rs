use std::process::ExitCode;

use arachnida_app::cli::ScorpionArgs;
use arachnida_app::logging::{self, LogDestination};
use clap::Parser;
use log::LevelFilter;

fn main() -> ExitCode {
    let args = ScorpionArgs::parse();
    let destination = if args.json {
        LogDestination::Stderr
    } else {
        LogDestination::Terminal
    };
    logging::initialize(destination, LevelFilter::Info);
    arachnida_app::scorpion::run(args)
}
