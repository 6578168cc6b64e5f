//! Core library for the panelfetch startup banner.
//!
//! This crate probes the host a panel container runs on (CPU, memory, swap,
//! disk, network, kernel and OS), formats the results, and prepares the
//! hand-off to an interactive shell or a Node application.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use panelfetch_core::{LaunchConfigBuilder, SystemHost, SystemReport, format_bytes};
//!
//! let config = LaunchConfigBuilder::new()
//!     .working_dir("/home/container")
//!     .public_ip(false)
//!     .build();
//! config.validate().unwrap();
//!
//! let report = SystemReport::collect(&SystemHost, &config);
//! if let Some(memory) = report.memory {
//!     println!("RAM: {}", format_bytes(memory.ram.total));
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod launcher;
pub mod metrics;
pub mod report;

// Re-exports for public API
pub use command::{HostSource, SystemHost, capture_or};
pub use config::{LaunchConfig, LaunchConfigBuilder, LaunchMode, parse_package_list};
pub use error::{CoreError, CoreResult};
pub use format::{format_bytes, format_percent, format_uptime, format_usage, usage_bar, usage_fraction};
pub use launcher::{AppCommand, InstallStep, hand_off, plan_install, resolve_app_command, run_install_step};
pub use report::SystemReport;
