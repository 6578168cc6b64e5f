//! Hostname, OS, kernel, uptime and Node toolchain versions.

use std::path::Path;

use serde::Serialize;

use super::{NOT_INSTALLED, UNKNOWN, strip_quotes};
use crate::command::{HostSource, capture_or, first_line};

const OS_RELEASE_PATH: &str = "/etc/os-release";
const HOSTNAME_PATH: &str = "/etc/hostname";
const UPTIME_PATH: &str = "/proc/uptime";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub hostname: String,
    pub os: String,
    pub kernel: String,
    pub arch: String,
    pub uptime_seconds: Option<u64>,
    pub node_version: String,
    pub npm_version: String,
}

impl HostInfo {
    pub fn collect(source: &dyn HostSource) -> Self {
        Self {
            hostname: hostname(source),
            os: os_name(source),
            kernel: capture_or(source, "uname", &["-r"], UNKNOWN),
            arch: capture_or(source, "uname", &["-m"], UNKNOWN),
            uptime_seconds: source
                .read_file(Path::new(UPTIME_PATH))
                .ok()
                .and_then(|content| parse_uptime(&content)),
            node_version: capture_or(source, "node", &["-v"], NOT_INSTALLED),
            npm_version: capture_or(source, "npm", &["-v"], NOT_INSTALLED),
        }
    }
}

fn hostname(source: &dyn HostSource) -> String {
    source
        .env_var("HOSTNAME")
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            source
                .read_file(Path::new(HOSTNAME_PATH))
                .ok()
                .and_then(|content| first_line(&content))
        })
        .unwrap_or_else(|| capture_or(source, "hostname", &[], UNKNOWN))
}

fn os_name(source: &dyn HostSource) -> String {
    source
        .read_file(Path::new(OS_RELEASE_PATH))
        .ok()
        .and_then(|content| parse_os_release(&content))
        .unwrap_or_else(|| capture_or(source, "uname", &["-s", "-r"], UNKNOWN))
}

/// Reads the distribution name from /etc/os-release.
///
/// `PRETTY_NAME` is preferred; otherwise `NAME` and `VERSION` are combined.
pub fn parse_os_release(content: &str) -> Option<String> {
    let mut name = None;
    let mut version = None;

    for line in content.lines() {
        if let Some(value) = line.strip_prefix("PRETTY_NAME=") {
            let value = strip_quotes(value);
            if !value.is_empty() {
                return Some(value);
            }
        } else if let Some(value) = line.strip_prefix("NAME=") {
            name = Some(strip_quotes(value));
        } else if let Some(value) = line.strip_prefix("VERSION=") {
            version = Some(strip_quotes(value));
        }
    }

    match (name, version) {
        (Some(n), Some(v)) if !n.is_empty() && !v.is_empty() => Some(format!("{n} {v}")),
        (Some(n), _) if !n.is_empty() => Some(n),
        _ => None,
    }
}

/// Parses the first field of /proc/uptime (seconds, fractional).
pub fn parse_uptime(content: &str) -> Option<u64> {
    let seconds = content.split_whitespace().next()?.parse::<f64>().ok()?;
    (seconds.is_finite() && seconds >= 0.0).then(|| seconds as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_pretty_name() {
        let content = "NAME=\"Debian GNU/Linux\"\nVERSION=\"12 (bookworm)\"\nPRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n";
        assert_eq!(
            parse_os_release(content).as_deref(),
            Some("Debian GNU/Linux 12 (bookworm)")
        );
    }

    #[test]
    fn combines_name_and_version() {
        let content = "NAME=Alpine Linux\nVERSION='3.19'\n";
        assert_eq!(parse_os_release(content).as_deref(), Some("Alpine Linux 3.19"));
        assert_eq!(parse_os_release("NAME=\"Void\"\n").as_deref(), Some("Void"));
        assert_eq!(parse_os_release("ID=void\n"), None);
    }

    #[test]
    fn parses_uptime_seconds() {
        assert_eq!(parse_uptime("350735.47 234388.90\n"), Some(350_735));
        assert_eq!(parse_uptime("-1 0"), None);
        assert_eq!(parse_uptime(""), None);
    }
}
