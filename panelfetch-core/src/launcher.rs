// ============================================================================
// panelfetch-core/src/launcher.rs
// ============================================================================
//
// LAUNCHER: Dependency installation and process hand-off
//
// After the banner, control passes either to an interactive shell or to the
// Node application. For the application, dependencies are brought in first:
//
//   1. packages listed for removal are uninstalled
//   2. `npm install` runs when package.json exists but node_modules does not
//   3. extra packages requested by the panel are installed
//
// The application itself is `npm start` when package.json declares a start
// script and `node <main file>` otherwise. On Unix the launcher replaces the
// current process with the target so that signals from the panel reach it
// directly.

use std::fmt;
use std::fs;
use std::path::Path;
use std::process::Command;

use log::{debug, info};
use serde_json::Value;

use crate::command::{log_command, require_command};
use crate::config::LaunchConfig;
use crate::error::{CoreError, CoreResult};

/// A single npm invocation performed before the application starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// `npm uninstall <packages>`
    Remove(Vec<String>),
    /// `npm install` for the project's own package.json
    InstallProject,
    /// `npm install <packages>`
    AddPackages(Vec<String>),
}

impl InstallStep {
    /// Arguments passed to `npm` for this step.
    pub fn npm_args(&self) -> Vec<String> {
        match self {
            InstallStep::Remove(packages) => {
                let mut args = vec!["uninstall".to_string()];
                args.extend(packages.iter().cloned());
                args
            }
            InstallStep::InstallProject => vec!["install".to_string()],
            InstallStep::AddPackages(packages) => {
                let mut args = vec!["install".to_string()];
                args.extend(packages.iter().cloned());
                args
            }
        }
    }
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStep::Remove(packages) => write!(f, "Removing {}", packages.join(", ")),
            InstallStep::InstallProject => write!(f, "Installing project dependencies"),
            InstallStep::AddPackages(packages) => write!(f, "Installing {}", packages.join(", ")),
        }
    }
}

/// Decides which npm steps must run before launch.
pub fn plan_install(config: &LaunchConfig) -> Vec<InstallStep> {
    if config.skip_install {
        return Vec::new();
    }

    let mut steps = Vec::new();
    if !config.remove_packages.is_empty() {
        steps.push(InstallStep::Remove(config.remove_packages.clone()));
    }

    let dir = &config.working_dir;
    if dir.join("package.json").is_file() && !dir.join("node_modules").is_dir() {
        steps.push(InstallStep::InstallProject);
    }

    if !config.node_packages.is_empty() {
        steps.push(InstallStep::AddPackages(config.node_packages.clone()));
    }

    steps
}

/// Runs one install step in `working_dir` with the terminal attached.
pub fn run_install_step(step: &InstallStep, working_dir: &Path) -> CoreResult<()> {
    let npm = require_command("npm")?;
    run_npm(&npm, step, working_dir)
}

fn run_npm(npm: &Path, step: &InstallStep, working_dir: &Path) -> CoreResult<()> {
    let mut cmd = Command::new(npm);
    cmd.args(step.npm_args()).current_dir(working_dir);
    log_command(&cmd);

    info!("{step}");
    let status = cmd.status().map_err(|source| CoreError::CommandStart {
        program: "npm".to_string(),
        source,
    })?;

    if !status.success() {
        return Err(CoreError::CommandFailed {
            program: format!("npm {}", step.npm_args().join(" ")),
            code: status.code().unwrap_or(-1),
            stderr: String::new(),
        });
    }
    Ok(())
}

/// Program and arguments the process is handed off to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl AppCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Interactive shell, started without arguments.
    pub fn shell(shell: &str) -> Self {
        Self::new(shell, &[])
    }

    fn to_command(&self, working_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(working_dir);
        cmd
    }
}

impl fmt::Display for AppCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Whether a package.json document declares a non-empty `scripts.start`.
pub fn has_start_script(package_json: &str) -> CoreResult<bool> {
    let manifest: Value = serde_json::from_str(package_json)?;
    Ok(manifest
        .get("scripts")
        .and_then(|scripts| scripts.get("start"))
        .and_then(Value::as_str)
        .is_some_and(|script| !script.trim().is_empty()))
}

/// Chooses how to start the application in `working_dir`.
pub fn resolve_app_command(working_dir: &Path, main_file: &str) -> CoreResult<AppCommand> {
    let manifest = working_dir.join("package.json");
    if manifest.is_file() {
        let content = fs::read_to_string(&manifest)?;
        if has_start_script(&content)? {
            debug!("Using start script from {}", manifest.display());
            return Ok(AppCommand::new("npm", &["start"]));
        }
    }

    let main_path = working_dir.join(main_file);
    if !main_path.is_file() {
        return Err(CoreError::MainFileNotFound(main_path));
    }
    Ok(AppCommand::new("node", &[main_file]))
}

/// Replaces the current process with `command`.
///
/// Only returns on failure. Bare program names are looked up on `PATH` first
/// so a missing runtime is reported as such rather than as an exec error.
#[cfg(unix)]
pub fn hand_off(command: &AppCommand, working_dir: &Path) -> CoreResult<i32> {
    use std::os::unix::process::CommandExt;

    ensure_available(command)?;
    let mut cmd = command.to_command(working_dir);
    log_command(&cmd);

    let source = cmd.exec();
    Err(CoreError::CommandStart {
        program: command.program.clone(),
        source,
    })
}

/// Runs `command` to completion and returns its exit code.
#[cfg(not(unix))]
pub fn hand_off(command: &AppCommand, working_dir: &Path) -> CoreResult<i32> {
    ensure_available(command)?;
    let mut cmd = command.to_command(working_dir);
    log_command(&cmd);

    let status = cmd.status().map_err(|source| CoreError::CommandStart {
        program: command.program.clone(),
        source,
    })?;
    Ok(status.code().unwrap_or(1))
}

fn ensure_available(command: &AppCommand) -> CoreResult<()> {
    if command.program.contains(std::path::MAIN_SEPARATOR) {
        if !Path::new(&command.program).is_file() {
            return Err(CoreError::DependencyNotFound(command.program.clone()));
        }
        return Ok(());
    }
    require_command(&command.program).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npm_args_per_step() {
        assert_eq!(InstallStep::InstallProject.npm_args(), vec!["install"]);
        assert_eq!(
            InstallStep::Remove(vec!["left-pad".into()]).npm_args(),
            vec!["uninstall", "left-pad"]
        );
        assert_eq!(
            InstallStep::AddPackages(vec!["a".into(), "b".into()]).npm_args(),
            vec!["install", "a", "b"]
        );
    }

    #[test]
    fn detects_start_script() {
        assert!(has_start_script(r#"{"scripts":{"start":"node bot.js"}}"#).unwrap());
        assert!(!has_start_script(r#"{"scripts":{"start":"  "}}"#).unwrap());
        assert!(!has_start_script(r#"{"scripts":{"test":"jest"}}"#).unwrap());
        assert!(!has_start_script(r#"{"name":"x"}"#).unwrap());
        assert!(has_start_script("{not json").is_err());
    }

    #[test]
    fn app_command_display() {
        assert_eq!(AppCommand::new("node", &["index.js"]).to_string(), "node index.js");
        assert_eq!(AppCommand::shell("/bin/bash").to_string(), "/bin/bash");
    }

    #[cfg(unix)]
    #[test]
    fn failing_npm_step_reports_exit_code() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let npm = dir.path().join("npm");
        fs::write(&npm, "#!/bin/sh\nexit 3\n").unwrap();
        fs::set_permissions(&npm, fs::Permissions::from_mode(0o755)).unwrap();

        let step = InstallStep::AddPackages(vec!["axios".into()]);
        match run_npm(&npm, &step, dir.path()) {
            Err(CoreError::CommandFailed { program, code, .. }) => {
                assert_eq!(program, "npm install axios");
                assert_eq!(code, 3);
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_npm_step_runs_in_working_dir() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let npm = dir.path().join("npm");
        fs::write(&npm, "#!/bin/sh\necho \"$@\" > args.txt\n").unwrap();
        fs::set_permissions(&npm, fs::Permissions::from_mode(0o755)).unwrap();

        run_npm(&npm, &InstallStep::Remove(vec!["request".into()]), dir.path()).unwrap();
        let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert_eq!(args.trim(), "uninstall request");
    }

    #[cfg(unix)]
    #[test]
    fn missing_absolute_program_is_reported() {
        let command = AppCommand::shell("/definitely/not/a/shell");
        assert!(matches!(
            ensure_available(&command),
            Err(CoreError::DependencyNotFound(_))
        ));
    }
}
