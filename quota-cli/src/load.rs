//! Seed loading: file → raw records → normalized tasks.

use anyhow::{Context, Result};
use quota_core::Task;
use quota_ingest::{normalize, parse_seed_csv, parse_seed_json};
use std::fs;
use std::path::Path;

/// Load a task snapshot from a seed file. `.csv` parses as a CSV export,
/// everything else as a JSON array. Rejected records are logged and
/// dropped; analytics run on whatever survives.
pub fn load_tasks(path: &Path, tz: &str) -> Result<Vec<Task>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let raw = if is_csv {
        parse_seed_csv(path)?
    } else {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        parse_seed_json(&text).with_context(|| format!("parsing {}", path.display()))?
    };

    let report = normalize(&raw, tz);
    for r in &report.rejected {
        tracing::warn!(index = r.index, reason = %r.reason, "seed record rejected");
    }
    tracing::info!(
        accepted = report.accepted(),
        rejected = report.rejected.len(),
        "seed loaded from {}",
        path.display()
    );

    Ok(report.tasks)
}
