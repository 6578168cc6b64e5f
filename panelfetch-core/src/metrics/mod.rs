//! Host metric probes.
//!
//! Each submodule pairs pure `parse_*` functions over command or `/proc`
//! output with a `collect` function that reads the host through a
//! [`HostSource`](crate::command::HostSource) and substitutes a fallback
//! constant whenever a command is missing or its output does not parse.

pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;

pub use cpu::{CpuInfo, LoadAverage};
pub use disk::DiskUsage;
pub use host::HostInfo;
pub use memory::{MemoryInfo, MemoryUsage};
pub use network::NetworkInfo;

/// Fallback for any value that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Fallback for the public address when the lookup fails or times out.
pub const UNAVAILABLE: &str = "Unavailable";

/// Fallback for tool versions when the tool is not on `PATH`.
pub const NOT_INSTALLED: &str = "Not installed";

/// Value of `key=value` style lines, with surrounding quotes removed.
pub(crate) fn strip_quotes(value: &str) -> String {
    value.trim().trim_matches('"').trim_matches('\'').to_string()
}
