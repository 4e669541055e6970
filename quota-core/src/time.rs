//! Time utilities: day diffs, ISO week keys, timezone-aware parsing.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Whole days between two timestamps, rounded to the nearest day and
/// floored at zero. Clock skew can put `end` before `start`; that still
/// reports 0, never a negative duration.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let days = (end - start).num_seconds() as f64 / 86_400.0;
    days.round().max(0.0) as i64
}

/// ISO-8601 week key, e.g. "2024-W09".
///
/// Weeks start Monday; week 1 contains the year's first Thursday. The week
/// number is zero-padded so keys sort correctly as plain strings across
/// the W9/W10 boundary.
pub fn iso_week_key(at: DateTime<Utc>) -> String {
    let week = at.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Parse a naive local timestamp like "2024-03-01 14:30" in an IANA tz
/// like "America/Chicago", returning UTC.
///
/// Seed exports are inconsistent about format, so several shapes are
/// accepted; date-only values resolve to local midnight.
pub fn parse_local_to_utc(local: &str, tz: &str) -> Result<DateTime<Utc>> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    let ndt = parse_naive(local)
        .ok_or_else(|| anyhow::anyhow!("invalid local datetime '{local}'"))?;

    let local_dt = tz
        .from_local_datetime(&ndt)
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous or invalid local time (DST?): {local} {tz}"))?;

    Ok(local_dt.with_timezone(&Utc))
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
