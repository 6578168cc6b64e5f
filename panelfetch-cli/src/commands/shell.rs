// panelfetch-cli/src/commands/shell.rs
//
// `panelfetch shell`: print the banner, then become the interactive shell.

use panelfetch_core::{AppCommand, hand_off};

use crate::cli::ShellArgs;
use crate::error::{CliErrorContext, CliResult};

use super::show_banner;

/// Shows the banner and hands the process to the configured shell.
///
/// On Unix this only returns if the shell could not be started.
pub fn run_shell(args: &ShellArgs) -> CliResult<i32> {
    let config = args.to_config();
    config.validate()?;

    show_banner(&config);

    let shell = AppCommand::shell(&config.shell);
    hand_off(&shell, &config.working_dir)
        .cli_with_context(|| format!("Starting shell {}", config.shell))
}
