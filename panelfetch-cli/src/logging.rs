// ============================================================================
// panelfetch-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and optional file logging
//
// Log records always go to stderr so they never mix with the banner on
// stdout. Without a log file the console logger is env_logger, which honours
// RUST_LOG. With --log-file a fern dispatch writes to stderr and appends to
// the file, timestamped and with ANSI codes stripped.
//
// USAGE:
// - default: warnings and errors only
// - -v / --verbose: debug output, including every probe command
// - RUST_LOG=trace: everything (env_logger mode only)

use crate::error::CliResult;
use log::LevelFilter;
use owo_colors::OwoColorize;
use panelfetch_core::CoreError;
use std::io::Write;
use std::path::Path;

/// Log level implied by the verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Short, optionally colored level tag for console lines.
fn level_tag(level: log::Level, color: bool) -> String {
    let tag = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    if !color {
        return tag.to_string();
    }
    match level {
        log::Level::Error => tag.bright_red().to_string(),
        log::Level::Warn => tag.yellow().to_string(),
        log::Level::Info => tag.green().to_string(),
        log::Level::Debug => tag.blue().to_string(),
        log::Level::Trace => tag.magenta().to_string(),
    }
}

/// Initializes the global logger. Call once, before any probe runs.
pub fn init(verbose: bool, log_file: Option<&Path>, color: bool) -> CliResult<()> {
    let level = level_for(verbose);

    match log_file {
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .target(env_logger::Target::Stderr)
                .format(move |buf, record| {
                    writeln!(buf, "{} {}", level_tag(record.level(), color), record.args())
                })
                .try_init()
                .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logger: {e}")))?;
        }
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let console = fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!("{} {}", level_tag(record.level(), color), message))
                })
                .chain(std::io::stderr());

            let file = fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        strip_ansi_escapes::strip_str(message.to_string())
                    ))
                })
                .chain(fern::log_file(path)?);

            fern::Dispatch::new()
                .level(level)
                .chain(console)
                .chain(file)
                .apply()
                .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logger: {e}")))?;
        }
    }

    log::debug!("Logger initialized with level: {level}");
    Ok(())
}
