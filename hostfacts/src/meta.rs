//! Plugin descriptor exported via `--meta`, `--json` and `--savejson`.

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    #[serde(rename = "type")]
    pub plugin_type: &'static str,
    pub icon: &'static str,
    pub version: &'static str,
    pub min_number_of_workers: u32,
    pub max_number_of_workers: u32,
    /// Millicores (1000 == 1 CPU core).
    pub min_cpu_limit: u32,
    /// Megabytes.
    pub min_memory_limit: u32,
    pub min_gpu_limit: u32,
    pub max_gpu_limit: u32,
    /// Key-value output hints for downstream consumers. Empty: this plugin
    /// writes nothing to its output directory.
    pub output_meta: serde_json::Map<String, serde_json::Value>,
}

pub fn plugin_meta() -> PluginMeta {
    PluginMeta {
        name: "hostfacts",
        title: "An app to display system information",
        category: "",
        plugin_type: "ds",
        icon: "",
        version: env!("CARGO_PKG_VERSION"),
        min_number_of_workers: 1,
        max_number_of_workers: 1,
        min_cpu_limit: 1000,
        min_memory_limit: 200,
        min_gpu_limit: 0,
        max_gpu_limit: 0,
        output_meta: serde_json::Map::new(),
    }
}

impl PluginMeta {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the JSON representation into `dir`, returning the file path.
    pub fn save_into(&self, dir: &Path) -> io::Result<PathBuf> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.name));
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Human-readable listing for `--meta`.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "NAME: {}", self.name);
        let _ = writeln!(out, "TITLE: {}", self.title);
        let _ = writeln!(out, "CATEGORY: {}", self.category);
        let _ = writeln!(out, "TYPE: {}", self.plugin_type);
        let _ = writeln!(out, "VERSION: {}", self.version);
        out
    }
}
