//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

use panelfetch_core::{LaunchConfig, SystemHost, SystemReport};

use crate::progress::{finish_spinner, start_spinner};
use crate::terminal;

/// Module containing the implementation of the `banner` command.
pub mod banner;
/// Module containing the implementation of the `shell` command.
pub mod shell;
/// Module containing the implementation of the `start` command.
/// Installs npm dependencies before handing off to the application.
pub mod start;

/// Probes the real host with a spinner on stderr.
pub(crate) fn collect_report(config: &LaunchConfig) -> SystemReport {
    let spinner = start_spinner("Collecting system information");
    let report = SystemReport::collect(&SystemHost, config);
    finish_spinner(spinner);
    report
}

/// Collects and prints the banner.
pub(crate) fn show_banner(config: &LaunchConfig) {
    let report = collect_report(config);
    terminal::print_banner(&report);
}
