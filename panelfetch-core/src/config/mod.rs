//! Configuration structures and constants for the panelfetch-core library.
//!
//! This module holds everything that shapes a single startup: where the
//! server files live, which entry point to run, which shell to drop into, and
//! how long the network probes may take.

mod builder;

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

pub use builder::LaunchConfigBuilder;

// Default constants

/// Home directory of the server inside a panel container.
pub const DEFAULT_WORKING_DIR: &str = "/home/container";

/// Entry point used when `package.json` has no start script.
pub const DEFAULT_MAIN_FILE: &str = "index.js";

/// Interactive shell used by the `shell` launch mode.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Endpoint that answers with the caller's public address as plain text.
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org";

/// Upper bound for a single network probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Longest probe timeout accepted by [`LaunchConfig::validate`].
pub const MAX_PROBE_TIMEOUT: Duration = Duration::from_secs(60);

/// What happens after the banner has been printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    /// Print the banner and exit.
    Banner,
    /// Print the banner and replace the process with an interactive shell.
    #[default]
    Shell,
    /// Print the banner, install dependencies and start the Node application.
    App,
}

impl FromStr for LaunchMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "banner" => Ok(LaunchMode::Banner),
            "shell" | "bash" => Ok(LaunchMode::Shell),
            "app" | "node" | "start" => Ok(LaunchMode::App),
            other => Err(CoreError::Config(format!(
                "unknown launch mode '{other}' (expected banner, shell or app)"
            ))),
        }
    }
}

/// Main configuration structure for the panelfetch-core library.
///
/// Built by the CLI from arguments and panel environment variables, then
/// handed to [`crate::SystemReport::collect`] and the launcher functions.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Directory holding the server files (`package.json`, entry point)
    pub working_dir: PathBuf,

    /// Entry point passed to `node` when no start script exists
    pub main_file: String,

    /// Shell executed by the shell launch mode
    pub shell: String,

    /// Mount whose usage is reported in the disk section
    pub disk_path: PathBuf,

    /// Extra npm packages installed before launch
    pub node_packages: Vec<String>,

    /// npm packages removed before launch
    pub remove_packages: Vec<String>,

    /// Skip every npm step
    pub skip_install: bool,

    /// Whether the public address is looked up over the network
    pub public_ip: bool,

    /// Endpoint queried for the public address
    pub public_ip_url: String,

    /// Timeout for each network probe
    pub probe_timeout: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from(DEFAULT_WORKING_DIR),
            main_file: DEFAULT_MAIN_FILE.to_string(),
            shell: DEFAULT_SHELL.to_string(),
            disk_path: PathBuf::from(DEFAULT_WORKING_DIR),
            node_packages: Vec::new(),
            remove_packages: Vec::new(),
            skip_install: false,
            public_ip: true,
            public_ip_url: DEFAULT_PUBLIC_IP_URL.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl LaunchConfig {
    /// Checks the values that would otherwise fail late, halfway through a launch.
    pub fn validate(&self) -> CoreResult<()> {
        if self.probe_timeout.is_zero() || self.probe_timeout > MAX_PROBE_TIMEOUT {
            return Err(CoreError::Config(format!(
                "probe timeout must be between 1 and {} seconds",
                MAX_PROBE_TIMEOUT.as_secs()
            )));
        }

        if self.main_file.trim().is_empty() {
            return Err(CoreError::Config("main file must not be empty".to_string()));
        }
        if Path::new(&self.main_file).is_absolute() {
            return Err(CoreError::Config(format!(
                "main file '{}' must be relative to the working directory",
                self.main_file
            )));
        }

        if self.shell.trim().is_empty() {
            return Err(CoreError::Config("shell must not be empty".to_string()));
        }

        for name in self.node_packages.iter().chain(&self.remove_packages) {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(CoreError::Config(format!("invalid package name '{name}'")));
            }
        }

        Ok(())
    }
}

/// Splits a panel-style package list ("express, dotenv axios") into names.
pub fn parse_package_list(list: &str) -> Vec<String> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_mode_accepts_aliases() {
        assert_eq!("Banner".parse::<LaunchMode>().unwrap(), LaunchMode::Banner);
        assert_eq!("bash".parse::<LaunchMode>().unwrap(), LaunchMode::Shell);
        assert_eq!(" node ".parse::<LaunchMode>().unwrap(), LaunchMode::App);
        assert!("daemon".parse::<LaunchMode>().is_err());
    }

    #[test]
    fn package_list_splits_on_commas_and_spaces() {
        assert_eq!(
            parse_package_list("express, dotenv  axios,,"),
            vec!["express", "dotenv", "axios"]
        );
        assert!(parse_package_list("  ").is_empty());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(LaunchConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = LaunchConfig {
            probe_timeout: Duration::ZERO,
            ..LaunchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LaunchConfig {
            main_file: "/etc/passwd".to_string(),
            ..LaunchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LaunchConfig {
            node_packages: vec!["bad name".to_string()],
            ..LaunchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
