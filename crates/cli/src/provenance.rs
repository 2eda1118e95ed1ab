//! Sidecar records describing how a saved report was produced.

use anyhow::{Context, Result};
use seaplan::cfg::SimCfg;
use seaplan::sim::Report;
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of `<report>.provenance.json`.
#[derive(Debug, Serialize)]
pub struct Provenance<'a> {
    pub code_rev: String,
    pub seaplan_version: &'static str,
    pub written_by: String,
    pub seed: u64,
    pub cfg: &'a SimCfg,
    pub funded: usize,
    pub total_value: f64,
    pub report: String,
}

impl<'a> Provenance<'a> {
    #[track_caller]
    pub fn of(report: &'a Report, report_path: &Path) -> Self {
        let at = Location::caller();
        Self {
            code_rev: code_rev(),
            seaplan_version: seaplan::VERSION,
            written_by: format!("{}:{}", at.file(), at.line()),
            seed: report.seed,
            cfg: &report.cfg,
            funded: report.allocation.funded_count(),
            total_value: report.allocation.total_value,
            report: report_path.display().to_string(),
        }
    }

    /// Write the record next to the report and return its path.
    pub fn save(&self, report_path: &Path) -> Result<PathBuf> {
        let path = sidecar_path(report_path);
        let body = serde_json::to_vec_pretty(self)?;
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), seed = self.seed, "wrote provenance");
        Ok(path)
    }
}

/// `runs/a.json` becomes `runs/a.provenance.json`.
pub fn sidecar_path(report_path: &Path) -> PathBuf {
    report_path.with_extension("provenance.json")
}

/// Commit baked in at build time via `GIT_COMMIT`, else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|r| !r.is_empty()) {
        return rev.to_owned();
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
