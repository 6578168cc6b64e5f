//! Disk usage of the server volume via POSIX `df`.

use std::path::Path;

use serde::Serialize;

use crate::command::HostSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskUsage {
    pub filesystem: String,
    pub mount: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl DiskUsage {
    pub fn collect(source: &dyn HostSource, path: &Path) -> Option<Self> {
        let path = path.to_string_lossy();
        let output = source.run("df", &["-Pk", &*path]).ok()?;
        parse_df(&output)
    }
}

/// Parses `df -Pk` output (1024-byte blocks, one line per filesystem).
///
/// The last data line wins so that a header-only or wrapped output still
/// resolves to the filesystem holding the queried path.
pub fn parse_df(output: &str) -> Option<DiskUsage> {
    let line = output
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .last()?;

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 6 {
        return None;
    }

    let kib = |field: &str| field.parse::<u64>().ok().map(|v| v.saturating_mul(1024));

    Some(DiskUsage {
        filesystem: fields[0].to_string(),
        total: kib(fields[1])?,
        used: kib(fields[2])?,
        available: kib(fields[3])?,
        // Mount points may contain spaces.
        mount: fields[5..].join(" "),
    })
}
