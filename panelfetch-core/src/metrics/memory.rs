//! Memory and swap usage from /proc/meminfo, plus the container limit.
//!
//! Inside a panel container /proc/meminfo still describes the whole host, so
//! the cgroup limit is reported next to it when one is set.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::command::HostSource;

const MEMINFO_PATH: &str = "/proc/meminfo";

/// cgroup v2 first, then v1.
const CGROUP_LIMIT_PATHS: [&str; 2] = [
    "/sys/fs/cgroup/memory.max",
    "/sys/fs/cgroup/memory/memory.limit_in_bytes",
];

/// v1 reports "unlimited" as a page-aligned value close to i64::MAX.
const CGROUP_UNLIMITED_THRESHOLD: u64 = 1 << 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryUsage {
    pub total: u64,
    pub used: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    pub ram: MemoryUsage,
    pub swap: MemoryUsage,
    /// Container memory limit in bytes, when one is enforced.
    pub limit: Option<u64>,
}

impl MemoryInfo {
    /// Returns `None` when /proc/meminfo is unreadable or malformed.
    pub fn collect(source: &dyn HostSource) -> Option<Self> {
        let content = source.read_file(Path::new(MEMINFO_PATH)).ok()?;
        let mut info = parse_meminfo(&content)?;
        info.limit = CGROUP_LIMIT_PATHS.iter().find_map(|path| {
            source
                .read_file(Path::new(path))
                .ok()
                .and_then(|value| parse_cgroup_limit(&value))
        });
        Some(info)
    }
}

/// Parses /proc/meminfo contents. Values there are in KiB.
///
/// Used memory is `MemTotal - MemAvailable`; kernels older than 3.14 lack
/// `MemAvailable`, in which case `MemFree + Buffers + Cached` stands in.
pub fn parse_meminfo(content: &str) -> Option<MemoryInfo> {
    let fields: HashMap<&str, u64> = content
        .lines()
        .filter_map(|line| {
            let (key, rest) = line.split_once(':')?;
            let kib = rest.split_whitespace().next()?.parse::<u64>().ok()?;
            Some((key.trim(), kib.saturating_mul(1024)))
        })
        .collect();

    let total = *fields.get("MemTotal")?;
    let available = fields.get("MemAvailable").copied().or_else(|| {
        let free = *fields.get("MemFree")?;
        let buffers = fields.get("Buffers").copied().unwrap_or(0);
        let cached = fields.get("Cached").copied().unwrap_or(0);
        Some(free.saturating_add(buffers).saturating_add(cached))
    })?;

    let swap_total = fields.get("SwapTotal").copied().unwrap_or(0);
    let swap_free = fields.get("SwapFree").copied().unwrap_or(0);

    Some(MemoryInfo {
        ram: MemoryUsage {
            total,
            used: total.saturating_sub(available),
        },
        swap: MemoryUsage {
            total: swap_total,
            used: swap_total.saturating_sub(swap_free),
        },
        limit: None,
    })
}

/// Parses a cgroup memory limit file. `max` and near-`i64::MAX` mean no limit.
pub fn parse_cgroup_limit(value: &str) -> Option<u64> {
    let value = value.trim();
    if value == "max" {
        return None;
    }
    value
        .parse::<u64>()
        .ok()
        .filter(|&bytes| bytes > 0 && bytes < CGROUP_UNLIMITED_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "MemTotal:        8048576 kB\nMemFree:         1024000 kB\nMemAvailable:    4024288 kB\nBuffers:          102400 kB\nCached:          2048000 kB\nSwapTotal:       2097152 kB\nSwapFree:        1048576 kB\n";

    #[test]
    fn parses_ram_and_swap() {
        let info = parse_meminfo(MEMINFO).unwrap();
        assert_eq!(info.ram.total, 8_048_576 * 1024);
        assert_eq!(info.ram.used, (8_048_576 - 4_024_288) * 1024);
        assert_eq!(info.swap.total, 2_097_152 * 1024);
        assert_eq!(info.swap.used, 1_048_576 * 1024);
        assert_eq!(info.limit, None);
    }

    #[test]
    fn falls_back_without_mem_available() {
        let content = "MemTotal: 1000 kB\nMemFree: 200 kB\nBuffers: 100 kB\nCached: 300 kB\n";
        let info = parse_meminfo(content).unwrap();
        assert_eq!(info.ram.used, 400 * 1024);
        assert_eq!(info.swap.total, 0);
        assert_eq!(info.swap.used, 0);
    }

    #[test]
    fn saturated_fallback_fields_do_not_overflow() {
        let content = "MemTotal: 1000 kB\nMemFree: 18446744073709551615 kB\nBuffers: 1 kB\nCached: 1 kB\n";
        let info = parse_meminfo(content).unwrap();
        assert_eq!(info.ram.total, 1000 * 1024);
        assert_eq!(info.ram.used, 0);
    }

    #[test]
    fn missing_total_is_none() {
        assert!(parse_meminfo("MemFree: 200 kB\n").is_none());
        assert!(parse_meminfo("").is_none());
    }

    #[test]
    fn parses_cgroup_limits() {
        assert_eq!(parse_cgroup_limit("max\n"), None);
        assert_eq!(parse_cgroup_limit("1073741824\n"), Some(1_073_741_824));
        assert_eq!(parse_cgroup_limit("9223372036854771712"), None);
        assert_eq!(parse_cgroup_limit("garbage"), None);
    }
}
