use std::process::ExitCode;

use arachnida_engine::{inspect_file, InspectError};
use crawl_logging::{crawl_error, crawl_info};

use crate::cli::ScorpionArgs;
use crate::report::FileReport;

/// Inspect every file named on the command line, continuing past failures.
pub fn collect_reports(args: &ScorpionArgs) -> (Vec<FileReport>, usize) {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failures = 0;
    for path in &args.files {
        match inspect_file(path) {
            Ok(attrs) => {
                if attrs.exif.is_empty() {
                    crawl_info!("No EXIF data found in {}", path.display());
                }
                reports.push(FileReport::from(&attrs));
            }
            Err(err @ InspectError::NotAnImage(_)) => crawl_info!("{}", err),
            Err(err) => {
                failures += 1;
                crawl_error!("{}", err);
            }
        }
    }
    (reports, failures)
}

pub fn run(args: ScorpionArgs) -> ExitCode {
    let (reports, failures) = collect_reports(&args);

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                crawl_error!("Failed to serialize reports: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for report in &reports {
            println!("{report}");
        }
    }

    if reports.is_empty() && failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
