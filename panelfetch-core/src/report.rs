//! Aggregated host snapshot shown in the banner.

use chrono::{DateTime, Local};
use log::debug;
use serde::Serialize;
use std::time::Instant;

use crate::command::HostSource;
use crate::config::LaunchConfig;
use crate::metrics::{CpuInfo, DiskUsage, HostInfo, MemoryInfo, NetworkInfo};

/// Everything the banner prints, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct SystemReport {
    pub generated_at: DateTime<Local>,
    pub host: HostInfo,
    pub cpu: CpuInfo,
    pub memory: Option<MemoryInfo>,
    pub disk: Option<DiskUsage>,
    pub network: NetworkInfo,
}

impl SystemReport {
    /// Runs every probe and assembles the report.
    ///
    /// The probes run concurrently on the rayon pool. Never fails: each
    /// section carries its own fallback.
    pub fn collect(source: &dyn HostSource, config: &LaunchConfig) -> Self {
        let start = Instant::now();

        let ((host, network), (cpu, (memory, disk))) = rayon::join(
            || {
                rayon::join(
                    || HostInfo::collect(source),
                    || NetworkInfo::collect(source, config),
                )
            },
            || {
                rayon::join(
                    || CpuInfo::collect(source),
                    || {
                        (
                            MemoryInfo::collect(source),
                            DiskUsage::collect(source, &config.disk_path),
                        )
                    },
                )
            },
        );

        debug!("Collected system report in {:?}", start.elapsed());

        Self {
            generated_at: Local::now(),
            host,
            cpu,
            memory,
            disk,
            network,
        }
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> crate::CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
