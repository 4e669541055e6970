//! Weekly throughput and the short-horizon revenue forecast.

use crate::task::Task;
use crate::time::iso_week_key;
use serde::Serialize;
use std::collections::BTreeMap;

/// One ISO week of completions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    /// "2024-W09" style key; zero-padded so string order is week order.
    pub week: String,
    pub count: usize,
    pub revenue: f64,
}

/// Group completed tasks by the ISO week of `completed_at`, ascending by
/// week key. Tasks still open are not throughput and are skipped.
pub fn throughput_by_week(tasks: &[Task]) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<String, (usize, f64)> = BTreeMap::new();

    for t in tasks {
        let Some(done_at) = t.completed_at else {
            continue;
        };
        let entry = buckets.entry(iso_week_key(done_at)).or_insert((0, 0.0));
        entry.0 += 1;
        if t.revenue.is_finite() {
            entry.1 += t.revenue;
        }
    }

    buckets
        .into_iter()
        .map(|(week, (count, revenue))| WeekBucket { week, count, revenue })
        .collect()
}

/// A predicted future week. Weeks are labeled by offset ("+1w", "+2w", …)
/// since the historical keys are opaque to the regression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub week: String,
    pub revenue: f64,
}

/// Ordinary least-squares fit of revenue against week index, extended
/// `horizon_weeks` into the future.
///
/// Fewer than two historical points: no fit, empty result. Predictions are
/// floored at zero; a forecast never promises negative revenue.
pub fn forecast(series: &[WeekBucket], horizon_weeks: usize) -> Vec<ForecastPoint> {
    let n = series.len();
    if n < 2 {
        return Vec::new();
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, bucket) in series.iter().enumerate() {
        let x = i as f64;
        let y = if bucket.revenue.is_finite() { bucket.revenue } else { 0.0 };
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let nf = n as f64;
    // Zero only if every x coincides, which the 0..n index rules out, but
    // the substitution keeps the division total.
    let mut denom = nf * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        denom = 1.0;
    }
    let slope = (nf * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / nf;

    (0..horizon_weeks)
        .map(|k| {
            let x = (n + k) as f64;
            ForecastPoint {
                week: format!("+{}w", k + 1),
                revenue: (slope * x + intercept).max(0.0),
            }
        })
        .collect()
}
