// ============================================================================
// panelfetch-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for LaunchConfig
//
// Fluent construction of LaunchConfig. Unset fields keep the defaults from
// LaunchConfig::default(); the disk path follows the working directory
// unless it was set explicitly.

use std::path::PathBuf;
use std::time::Duration;

use super::LaunchConfig;

/// Builder for creating LaunchConfig instances.
///
/// # Examples
///
/// ```rust
/// use panelfetch_core::config::LaunchConfigBuilder;
/// use std::time::Duration;
///
/// let config = LaunchConfigBuilder::new()
///     .working_dir("/srv/app")
///     .main_file("bot.js")
///     .node_packages(vec!["discord.js".to_string()])
///     .probe_timeout(Duration::from_secs(2))
///     .build();
///
/// assert_eq!(config.disk_path, std::path::PathBuf::from("/srv/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaunchConfigBuilder {
    working_dir: Option<PathBuf>,
    main_file: Option<String>,
    shell: Option<String>,
    disk_path: Option<PathBuf>,
    node_packages: Vec<String>,
    remove_packages: Vec<String>,
    skip_install: bool,
    public_ip: Option<bool>,
    public_ip_url: Option<String>,
    probe_timeout: Option<Duration>,
}

impl LaunchConfigBuilder {
    /// Creates a new builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn main_file(mut self, file: impl Into<String>) -> Self {
        self.main_file = Some(file.into());
        self
    }

    pub fn shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn disk_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_path = Some(path.into());
        self
    }

    pub fn node_packages(mut self, packages: Vec<String>) -> Self {
        self.node_packages = packages;
        self
    }

    pub fn remove_packages(mut self, packages: Vec<String>) -> Self {
        self.remove_packages = packages;
        self
    }

    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    /// Enables or disables the public address lookup.
    pub fn public_ip(mut self, enabled: bool) -> Self {
        self.public_ip = Some(enabled);
        self
    }

    pub fn public_ip_url(mut self, url: impl Into<String>) -> Self {
        self.public_ip_url = Some(url.into());
        self
    }

    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    /// Builds the configuration. Call [`LaunchConfig::validate`] before use.
    pub fn build(self) -> LaunchConfig {
        let defaults = LaunchConfig::default();
        let working_dir = self.working_dir.unwrap_or(defaults.working_dir);
        let disk_path = self.disk_path.unwrap_or_else(|| working_dir.clone());

        LaunchConfig {
            working_dir,
            main_file: self.main_file.unwrap_or(defaults.main_file),
            shell: self.shell.unwrap_or(defaults.shell),
            disk_path,
            node_packages: self.node_packages,
            remove_packages: self.remove_packages,
            skip_install: self.skip_install,
            public_ip: self.public_ip.unwrap_or(defaults.public_ip),
            public_ip_url: self.public_ip_url.unwrap_or(defaults.public_ip_url),
            probe_timeout: self.probe_timeout.unwrap_or(defaults.probe_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MAIN_FILE, DEFAULT_SHELL};

    #[test]
    fn builder_uses_defaults_for_unset_fields() {
        let config = LaunchConfigBuilder::new().build();
        assert_eq!(config.main_file, DEFAULT_MAIN_FILE);
        assert_eq!(config.shell, DEFAULT_SHELL);
        assert!(config.public_ip);
        assert!(!config.skip_install);
    }

    #[test]
    fn disk_path_follows_working_dir_unless_set() {
        let config = LaunchConfigBuilder::new().working_dir("/srv/app").build();
        assert_eq!(config.disk_path, PathBuf::from("/srv/app"));

        let config = LaunchConfigBuilder::new()
            .working_dir("/srv/app")
            .disk_path("/")
            .build();
        assert_eq!(config.disk_path, PathBuf::from("/"));
    }
}
