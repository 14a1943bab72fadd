//! Readers for the procfs sources the report consumes.
//!
//! Each read is open-read-close; no handle outlives the call. The root is
//! configurable so tests can point at a fake tree instead of `/proc`.

pub mod cpuinfo;
pub mod meminfo;
pub mod uptime;

use crate::{HostQueryError, HostResult};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl ProcFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProcFs { root: root.into() }
    }

    pub fn cpuinfo(&self) -> HostResult<String> {
        self.read("cpuinfo")
    }

    pub fn loadavg(&self) -> HostResult<String> {
        self.read("loadavg")
    }

    pub fn meminfo(&self) -> HostResult<String> {
        self.read("meminfo")
    }

    pub fn uptime(&self) -> HostResult<String> {
        self.read("uptime")
    }

    fn read(&self, name: &str) -> HostResult<String> {
        let path = self.root.join(name);
        log::debug!("reading {}", path.display());
        fs::read_to_string(&path)
            .map_err(|source| HostQueryError::SourceUnavailable { path, source })
    }
}
