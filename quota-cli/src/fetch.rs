//! Seed fetch: pull a JSON task array over HTTP and normalize it locally.

use anyhow::{Context, Result, ensure};
use quota_core::Task;
use quota_ingest::{RawTask, normalize};
use std::path::Path;

/// GET a seed URL, normalize the records, and return the surviving tasks.
pub async fn fetch_seed(url: &str, tz: &str) -> Result<Vec<Task>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("fetching {url}"))?;
    ensure!(
        response.status().is_success(),
        "seed fetch failed: {} returned {}",
        url,
        response.status()
    );

    let raw: Vec<RawTask> = response
        .json()
        .await
        .context("seed response is not a JSON array of task records")?;

    let report = normalize(&raw, tz);
    for r in &report.rejected {
        tracing::warn!(index = r.index, reason = %r.reason, "fetched record rejected");
    }
    tracing::info!(
        accepted = report.accepted(),
        rejected = report.rejected.len(),
        "seed fetched from {url}"
    );

    Ok(report.tasks)
}

/// Persist a normalized snapshot as pretty JSON for later `report` runs.
pub fn write_snapshot(tasks: &[Task], out: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
