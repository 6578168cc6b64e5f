// ============================================================================
// panelfetch-cli/src/commands/start.rs
// ============================================================================
//
// START COMMAND: Banner, dependency installation, application launch
//
// Steps, in order:
// 1. validate the configuration
// 2. print the banner
// 3. run the planned npm steps (uninstall, project install, extra packages)
// 4. resolve `npm start` or `node <main file>` and hand the process to it
//
// A failing npm step aborts the launch; the error names the step.

use log::{debug, info};
use panelfetch_core::{hand_off, plan_install, resolve_app_command, run_install_step};

use crate::cli::StartArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal::{print_step, print_success};

use super::show_banner;

/// Runs the `start` command and returns the application's exit code.
pub fn run_start(args: &StartArgs) -> CliResult<i32> {
    let config = args.to_config();
    config.validate()?;
    debug!("Start config: {config:?}");

    show_banner(&config);

    let steps = plan_install(&config);
    if steps.is_empty() {
        debug!("No dependency changes needed");
    }
    for step in &steps {
        print_step(&step.to_string());
        run_install_step(step, &config.working_dir).cli_with_context(|| step.to_string())?;
    }
    if !steps.is_empty() {
        print_success("Dependencies ready");
    }

    let app = resolve_app_command(&config.working_dir, &config.main_file)
        .cli_context("Resolving application")?;
    info!("Launching {app} in {}", config.working_dir.display());
    print_step(&format!("Starting {app}"));

    hand_off(&app, &config.working_dir).cli_with_context(|| format!("Starting {app}"))
}
