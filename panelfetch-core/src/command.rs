//! Command execution and host access.
//!
//! Every probe reads the host through [`HostSource`] so that the parsing and
//! fallback paths can be exercised against canned output in tests. The real
//! implementation, [`SystemHost`], shells out with `std::process::Command`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, trace};

use crate::error::{CoreError, CoreResult};

/// Read-only access to the host the banner describes.
pub trait HostSource: Sync {
    /// Runs a command and returns its trimmed stdout.
    ///
    /// A command that cannot be spawned yields [`CoreError::CommandStart`];
    /// one that exits non-zero yields [`CoreError::CommandFailed`].
    fn run(&self, program: &str, args: &[&str]) -> CoreResult<String>;

    /// Reads a whole file, typically from `/proc` or `/sys`.
    fn read_file(&self, path: &Path) -> CoreResult<String>;

    /// Looks up an environment variable.
    fn env_var(&self, key: &str) -> Option<String>;
}

/// [`HostSource`] backed by the real machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostSource for SystemHost {
    fn run(&self, program: &str, args: &[&str]) -> CoreResult<String> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        log_command(&cmd);

        let output = cmd.output().map_err(|source| CoreError::CommandStart {
            program: program.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(
                "{} exited with {}: {}",
                program,
                output.status.code().unwrap_or(-1),
                stderr
            );
            return Err(CoreError::CommandFailed {
                program: program.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn read_file(&self, path: &Path) -> CoreResult<String> {
        trace!("Reading {}", path.display());
        Ok(fs::read_to_string(path)?)
    }

    fn env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Logs a command line at debug level before it is executed.
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<String> = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    debug!("Executing: {} {}", program, args.join(" "));
}

/// Runs a command and returns its first non-empty line, or `fallback`.
pub fn capture_or(source: &dyn HostSource, program: &str, args: &[&str], fallback: &str) -> String {
    match source.run(program, args) {
        Ok(output) => first_line(&output).unwrap_or_else(|| fallback.to_string()),
        Err(e) => {
            debug!("Falling back to '{}' for {}: {}", fallback, program, e);
            fallback.to_string()
        }
    }
}

/// First non-blank line of `text`, trimmed.
pub fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Locates an executable named `name` on a `PATH`-style string.
pub fn find_in_path(name: &str, path_var: &str) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Like [`find_in_path`] against the current `PATH`, failing with
/// [`CoreError::DependencyNotFound`].
pub fn require_command(name: &str) -> CoreResult<PathBuf> {
    let path_var = env::var("PATH").unwrap_or_default();
    find_in_path(name, &path_var).ok_or_else(|| CoreError::DependencyNotFound(name.to_string()))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_skips_blank_lines() {
        assert_eq!(first_line("\n  \n v18.19.0 \nnext"), Some("v18.19.0".to_string()));
        assert_eq!(first_line("   \n"), None);
    }

    #[cfg(unix)]
    #[test]
    fn run_echo_returns_trimmed_stdout() {
        let output = SystemHost.run("echo", &["  hello  "]).unwrap();
        assert_eq!(output, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_non_zero_exit() {
        match SystemHost.run("false", &[]) {
            Err(CoreError::CommandFailed { program, code, .. }) => {
                assert_eq!(program, "false");
                assert_eq!(code, 1);
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_falls_back() {
        let value = capture_or(&SystemHost, "definitely-not-a-real-binary-xyz", &[], "Unknown");
        assert_eq!(value, "Unknown");
    }

    #[cfg(unix)]
    #[test]
    fn find_in_path_locates_executables_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("tool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        let data = dir.path().join("data");
        fs::write(&data, "plain").unwrap();
        fs::set_permissions(&data, fs::Permissions::from_mode(0o644)).unwrap();

        let path_var = dir.path().to_string_lossy().to_string();
        assert_eq!(find_in_path("tool", &path_var), Some(tool));
        assert_eq!(find_in_path("data", &path_var), None);
        assert_eq!(find_in_path("absent", &path_var), None);
    }
}
