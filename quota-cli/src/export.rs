//! CSV export of the ranked list and the weekly series.

use anyhow::{Context, Result};
use quota_core::{Task, derive_all, sort_tasks, throughput_by_week};
use std::path::Path;

/// Write `ranked.csv` and `weekly.csv` into `out_dir`.
pub fn export_csv(tasks: &[Task], out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let ranked_path = out_dir.join("ranked.csv");
    let mut wtr = csv::Writer::from_path(&ranked_path)
        .with_context(|| format!("opening {}", ranked_path.display()))?;
    wtr.write_record(["rank", "id", "title", "priority", "status", "revenue", "time_taken", "roi"])?;
    for (i, d) in sort_tasks(&derive_all(tasks)).iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            d.task.id.clone(),
            d.task.title.clone(),
            format!("{:?}", d.task.priority),
            format!("{:?}", d.task.status),
            format!("{:.2}", d.task.revenue),
            format!("{:.2}", d.task.time_taken),
            d.roi.map(|r| format!("{r:.2}")).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;

    let weekly_path = out_dir.join("weekly.csv");
    let mut wtr = csv::Writer::from_path(&weekly_path)
        .with_context(|| format!("opening {}", weekly_path.display()))?;
    wtr.write_record(["week", "count", "revenue"])?;
    for w in throughput_by_week(tasks) {
        wtr.write_record([w.week, w.count.to_string(), format!("{:.2}", w.revenue)])?;
    }
    wtr.flush()?;

    tracing::info!("wrote {} and {}", ranked_path.display(), weekly_path.display());
    Ok(())
}
