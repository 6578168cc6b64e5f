// panelfetch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.
//
// Every option the panel is likely to configure also has an environment
// variable, because panel eggs pass settings through the container
// environment rather than through the startup command line.

use crate::error::CliResult;
use clap::{Args, Parser, Subcommand};
use panelfetch_core::config::{
    DEFAULT_MAIN_FILE, DEFAULT_PUBLIC_IP_URL, DEFAULT_SHELL, DEFAULT_WORKING_DIR,
};
use panelfetch_core::{LaunchConfig, LaunchConfigBuilder, LaunchMode, parse_package_list};
use std::path::PathBuf;
use std::time::Duration;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Panelfetch: startup banner for hosting panel containers",
    long_about = "Prints a summary of the host (CPU, memory, disk, network, OS) and then \
                  hands control to an interactive shell or the Node application."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch mode used when no subcommand is given (banner, shell or app)
    #[arg(long, value_name = "MODE", env = "PANEL_MODE")]
    pub mode: Option<String>,

    /// Disable colored output (NO_COLOR is honoured as well)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write log output to this file
    #[arg(long, global = true, value_name = "PATH", env = "PANELFETCH_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the banner and exit
    Banner(BannerArgs),
    /// Print the banner, then replace this process with an interactive shell
    Shell(ShellArgs),
    /// Print the banner, install dependencies and start the Node application
    Start(StartArgs),
}

impl Cli {
    /// The subcommand to run, falling back to the configured launch mode.
    ///
    /// The mode is only parsed here, so an explicit subcommand ignores it.
    /// The fallback arguments are parsed from an empty command line so that
    /// their environment variables and defaults still apply.
    pub fn resolve_command(&self) -> CliResult<Commands> {
        if let Some(command) = &self.command {
            return Ok(command.clone());
        }
        let mode = match self.mode.as_deref() {
            Some(value) => value.parse::<LaunchMode>()?,
            None => LaunchMode::default(),
        };
        let bin = "panelfetch";
        Ok(match mode {
            LaunchMode::Banner => Commands::Banner(BannerArgs::parse_from([bin])),
            LaunchMode::Shell => Commands::Shell(ShellArgs::parse_from([bin])),
            LaunchMode::App => Commands::Start(StartArgs::parse_from([bin])),
        })
    }
}

/// Options shared by every command that collects the report.
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Skip the public IP lookup (no outbound network access)
    #[arg(long, env = "PANELFETCH_OFFLINE")]
    pub offline: bool,

    /// Timeout in seconds for the public IP lookup
    #[arg(long, value_name = "SECONDS", env = "PANELFETCH_IP_TIMEOUT", default_value_t = 3)]
    pub ip_timeout: u64,

    /// Endpoint that returns the public IP as plain text
    #[arg(long, value_name = "URL", env = "PANELFETCH_IP_URL", default_value = DEFAULT_PUBLIC_IP_URL)]
    pub ip_url: String,

    /// Path whose filesystem usage is shown (defaults to the server directory)
    #[arg(long, value_name = "PATH")]
    pub disk_path: Option<PathBuf>,
}

impl ProbeArgs {
    fn apply(&self, builder: LaunchConfigBuilder) -> LaunchConfigBuilder {
        let builder = builder
            .public_ip(!self.offline)
            .public_ip_url(self.ip_url.clone())
            .probe_timeout(Duration::from_secs(self.ip_timeout));
        match &self.disk_path {
            Some(path) => builder.disk_path(path.clone()),
            None => builder,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct BannerArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Server directory (used for the disk line)
    #[arg(long, value_name = "DIR", env = "PANEL_DIR", default_value = DEFAULT_WORKING_DIR)]
    pub dir: PathBuf,

    /// Print the report as JSON instead of the banner
    #[arg(long)]
    pub json: bool,
}

impl BannerArgs {
    pub fn to_config(&self) -> LaunchConfig {
        self.probe
            .apply(LaunchConfigBuilder::new().working_dir(self.dir.clone()))
            .build()
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ShellArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Directory the shell starts in
    #[arg(long, value_name = "DIR", env = "PANEL_DIR", default_value = DEFAULT_WORKING_DIR)]
    pub dir: PathBuf,

    /// Shell to run after the banner
    #[arg(long, value_name = "PATH", env = "PANEL_SHELL", default_value = DEFAULT_SHELL)]
    pub shell: String,
}

impl ShellArgs {
    pub fn to_config(&self) -> LaunchConfig {
        self.probe
            .apply(
                LaunchConfigBuilder::new()
                    .working_dir(self.dir.clone())
                    .shell(self.shell.clone()),
            )
            .build()
    }
}

#[derive(Parser, Debug, Clone)]
pub struct StartArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Directory holding package.json and the entry point
    #[arg(long, value_name = "DIR", env = "PANEL_DIR", default_value = DEFAULT_WORKING_DIR)]
    pub dir: PathBuf,

    /// Entry point run with node when package.json has no start script
    #[arg(long, value_name = "FILE", env = "MAIN_FILE", default_value = DEFAULT_MAIN_FILE)]
    pub main_file: String,

    /// Extra npm packages to install, separated by spaces or commas
    #[arg(long, value_name = "LIST", env = "NODE_PACKAGES")]
    pub node_packages: Option<String>,

    /// npm packages to uninstall, separated by spaces or commas
    #[arg(long, value_name = "LIST", env = "UNNODE_PACKAGES")]
    pub remove_packages: Option<String>,

    /// Do not run npm before starting
    #[arg(long)]
    pub skip_install: bool,
}

impl StartArgs {
    pub fn to_config(&self) -> LaunchConfig {
        let packages = |list: &Option<String>| {
            list.as_deref().map(parse_package_list).unwrap_or_default()
        };
        self.probe
            .apply(
                LaunchConfigBuilder::new()
                    .working_dir(self.dir.clone())
                    .main_file(self.main_file.clone())
                    .node_packages(packages(&self.node_packages))
                    .remove_packages(packages(&self.remove_packages))
                    .skip_install(self.skip_install),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_banner_args() {
        let cli = Cli::parse_from(["panelfetch", "banner", "--offline", "--json"]);
        match cli.command {
            Some(Commands::Banner(args)) => {
                assert!(args.probe.offline);
                assert!(args.json);
                assert_eq!(args.probe.ip_timeout, 3);
                let config = args.to_config();
                assert!(!config.public_ip);
            }
            other => panic!("Expected Banner command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_start_args() {
        let cli = Cli::parse_from([
            "panelfetch",
            "start",
            "--dir",
            "/srv/bot",
            "--main-file",
            "bot.js",
            "--node-packages",
            "axios, dotenv",
            "--remove-packages",
            "request",
            "--disk-path",
            "/",
        ]);
        match cli.command {
            Some(Commands::Start(args)) => {
                let config = args.to_config();
                assert_eq!(config.working_dir, PathBuf::from("/srv/bot"));
                assert_eq!(config.main_file, "bot.js");
                assert_eq!(config.node_packages, vec!["axios", "dotenv"]);
                assert_eq!(config.remove_packages, vec!["request"]);
                assert_eq!(config.disk_path, PathBuf::from("/"));
                assert!(!config.skip_install);
            }
            other => panic!("Expected Start command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["panelfetch", "shell", "--shell", "/bin/sh", "--no-color", "-v"]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Shell(args)) => assert_eq!(args.to_config().shell, "/bin/sh"),
            other => panic!("Expected Shell command, got {other:?}"),
        }
    }

    #[test]
    fn test_mode_selects_default_command() {
        let cli = Cli::parse_from(["panelfetch", "--mode", "banner"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.resolve_command(), Ok(Commands::Banner(_))));
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let cli = Cli::parse_from(["panelfetch", "--mode", "daemon"]);
        let err = cli.resolve_command().unwrap_err();
        assert!(err.to_string().contains("unknown launch mode 'daemon'"));
    }

    #[test]
    fn test_subcommand_ignores_invalid_mode() {
        let cli = Cli::parse_from(["panelfetch", "--mode", "daemon", "banner", "--offline"]);
        assert!(matches!(cli.resolve_command(), Ok(Commands::Banner(_))));
    }
}
