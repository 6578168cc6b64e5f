// panelfetch-cli/src/commands/banner.rs
//
// `panelfetch banner`: print the report and exit.

use log::debug;

use crate::cli::BannerArgs;
use crate::error::CliResult;
use crate::terminal;

use super::collect_report;

/// Prints the banner (or the report as JSON) and returns the exit code.
pub fn run_banner(args: &BannerArgs) -> CliResult<i32> {
    let config = args.to_config();
    config.validate()?;
    debug!("Banner config: {config:?}");

    let report = collect_report(&config);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        terminal::print_banner(&report);
    }
    Ok(0)
}
