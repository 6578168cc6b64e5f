// panelfetch-cli/src/main.rs
//
// Entry point for the panelfetch binary.
//
// Responsibilities:
// - Parsing command-line arguments (and their environment fallbacks).
// - Setting up color output and logging.
// - Dispatching to the banner, shell or start command.
// - Reporting errors and mapping results to the process exit code.

use clap::Parser;
use panelfetch_cli::{Cli, Commands, logging, run_banner, run_shell, run_start, terminal};
use std::process;

fn main() {
    let cli = Cli::parse();

    terminal::set_color(!cli.no_color);

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref(), terminal::should_use_color()) {
        terminal::print_error(&e.to_string());
        process::exit(1);
    }

    let result = cli.resolve_command().and_then(|command| match command {
        Commands::Banner(args) => run_banner(&args),
        Commands::Shell(args) => run_shell(&args),
        Commands::Start(args) => run_start(&args),
    });

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            terminal::print_error(&e.to_string());
            process::exit(1);
        }
    }
}
