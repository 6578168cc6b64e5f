// ============================================================================
// panelfetch-core/src/metrics/cpu.rs
// ============================================================================
//
// CPU PROBE: Model name, core count and load average
//
// Model name comes from /proc/cpuinfo. x86 kernels expose `model name`;
// ARM boards usually only have `Hardware` or `Processor`, and some MIPS/
// POWER kernels use `cpu model`. Core count is what `nproc` reports, which
// honours the container's CPU affinity rather than the host's socket count.

use std::path::Path;

use serde::Serialize;

use super::UNKNOWN;
use crate::command::HostSource;

const CPUINFO_PATH: &str = "/proc/cpuinfo";
const LOADAVG_PATH: &str = "/proc/loadavg";

/// Keys tried in order when looking for a CPU name in /proc/cpuinfo.
const MODEL_KEYS: [&str; 4] = ["model name", "Hardware", "Processor", "cpu model"];

/// 1, 5 and 15 minute load averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuInfo {
    pub model: String,
    pub cores: Option<usize>,
    pub load: Option<LoadAverage>,
}

impl CpuInfo {
    pub fn collect(source: &dyn HostSource) -> Self {
        let model = source
            .read_file(Path::new(CPUINFO_PATH))
            .ok()
            .and_then(|content| parse_cpu_model(&content))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let cores = source
            .run("nproc", &[])
            .ok()
            .and_then(|output| parse_core_count(&output))
            .or_else(|| {
                // Older busybox images ship without nproc.
                source
                    .read_file(Path::new(CPUINFO_PATH))
                    .ok()
                    .and_then(|content| count_processors(&content))
            });

        let load = source
            .read_file(Path::new(LOADAVG_PATH))
            .ok()
            .and_then(|content| parse_load_average(&content));

        Self { model, cores, load }
    }
}

/// Extracts the CPU name from /proc/cpuinfo contents.
pub fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    MODEL_KEYS.iter().find_map(|key| {
        cpuinfo.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim() != *key {
                return None;
            }
            let value = squeeze_spaces(value);
            (!value.is_empty()).then_some(value)
        })
    })
}

/// Parses `nproc` output.
pub fn parse_core_count(output: &str) -> Option<usize> {
    output.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Counts `processor` entries in /proc/cpuinfo.
pub fn count_processors(cpuinfo: &str) -> Option<usize> {
    let count = cpuinfo
        .lines()
        .filter(|line| {
            line.split_once(':')
                .is_some_and(|(key, _)| key.trim() == "processor")
        })
        .count();
    (count > 0).then_some(count)
}

/// Parses the first three fields of /proc/loadavg.
pub fn parse_load_average(loadavg: &str) -> Option<LoadAverage> {
    let mut fields = loadavg.split_whitespace().map(str::parse::<f64>);
    let one = fields.next()?.ok()?;
    let five = fields.next()?.ok()?;
    let fifteen = fields.next()?.ok()?;
    Some(LoadAverage { one, five, fifteen })
}

/// Collapses runs of whitespace, which some vendors pad model names with.
fn squeeze_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
