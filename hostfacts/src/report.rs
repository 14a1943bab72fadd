//! The host facts report: nine ordered read-then-print steps.
//!
//! Every step is independently fallible and the first failure aborts the
//! run. Output already written stays written; a failure at step K means
//! sections 1..K-1 were printed and K..9 were not.

use hostfacts_hal::procfs::{cpuinfo, meminfo, uptime};
use hostfacts_hal::{HostResult, PlatformOps, ProcFs};
use std::io::Write;

/// Facts gathered by a single run, in report order.
#[derive(Debug, Clone)]
pub struct HostFacts {
    pub architecture: String,
    pub machine: String,
    pub hostname: String,
    pub cpu_models: Vec<String>,
    pub system: String,
    pub load_average: String,
    pub memory_summary: [String; 2],
    pub uptime_secs: u64,
}

/// Gathers and prints the fixed fact sequence, returning the populated
/// record on success.
pub fn report<W: Write>(
    version: &str,
    platform: &dyn PlatformOps,
    procfs: &ProcFs,
    out: &mut W,
) -> HostResult<HostFacts> {
    writeln!(out, "Version: {version}")?;

    let architecture = platform.architecture()?;
    writeln!(out, "Architecture: {architecture}")?;

    let machine = platform.machine()?;
    writeln!(out, "Machine: {machine}")?;

    let hostname = platform.hostname()?;
    writeln!(out, "Node: {hostname}")?;

    let cpu_models = cpuinfo::parse_model_names(&procfs.cpuinfo()?)?;
    writeln!(out, "Processors:")?;
    for (index, model) in cpu_models.iter().enumerate() {
        writeln!(out, "    {index}: {model}")?;
    }

    let system = platform.system()?;
    writeln!(out, "System: {system}")?;

    let load_average = procfs.loadavg()?.trim().to_string();
    writeln!(out, "Average Load: {load_average}")?;

    let memory_summary = meminfo::summary_lines(&procfs.meminfo()?)?;
    writeln!(out, "Memory Info:")?;
    for line in &memory_summary {
        writeln!(out, "     {line}")?;
    }

    let uptime_secs = uptime::parse_uptime_secs(&procfs.uptime()?)?;
    let (hours, minutes) = uptime::split_hours_minutes(uptime_secs);
    writeln!(out, "Uptime: {hours}:{minutes} hours")?;

    log::debug!("report complete: {} cpu(s), up {uptime_secs}s", cpu_models.len());

    Ok(HostFacts {
        architecture,
        machine,
        hostname,
        cpu_models,
        system,
        load_average,
        memory_summary,
        uptime_secs,
    })
}
