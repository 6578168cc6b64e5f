//! Spinner shown on stderr while the probes run.
//!
//! Only drawn when stderr is a terminal and debug logging is off; log lines
//! share stderr and would tear through the spinner.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Whether a spinner may be drawn on stderr.
pub fn spinner_enabled(stderr_is_tty: bool, debug_logging: bool) -> bool {
    stderr_is_tty && !debug_logging
}

/// Starts a spinner with `message`, or returns `None` when it would not be drawn.
pub fn start_spinner(message: &str) -> Option<ProgressBar> {
    if !spinner_enabled(std::io::stderr().is_terminal(), log::log_enabled!(log::Level::Debug)) {
        return None;
    }

    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Clears a spinner started by [`start_spinner`].
pub fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_only_on_quiet_terminal() {
        assert!(spinner_enabled(true, false));
        assert!(!spinner_enabled(true, true));
        assert!(!spinner_enabled(false, false));
    }

    #[test]
    fn finishing_without_spinner_is_noop() {
        finish_spinner(None);
    }
}
