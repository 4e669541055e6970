//! Boundary validation: raw fetched records in, typed tasks out.
//!
//! Total and side-effect-free. Malformed records are rejected with a
//! reason, never a panic; fields the engine can tolerate are coerced
//! instead. The engine itself only ever sees well-formed enums.

use crate::raw::{NumberField, RawTask, coerce_number};
use chrono::{DateTime, Utc};
use quota_core::{Priority, Task, TaskStatus, parse_local_to_utc};

/// A record that failed validation, with enough context to report it.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Index in the input slice.
    pub index: usize,
    pub reason: String,
}

/// Outcome of normalizing a batch.
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub tasks: Vec<Task>,
    pub rejected: Vec<RejectedRecord>,
}

impl NormalizeReport {
    pub fn accepted(&self) -> usize {
        self.tasks.len()
    }
}

/// Normalize raw records into engine tasks.
///
/// Naive timestamps (no offset) are interpreted in `tz`, an IANA name
/// like "America/Chicago"; pass "UTC" when the source is already UTC.
///
/// Coercions: numeric strings cleaned up; missing revenue/hours become
/// 0.0 (the engine reports such tasks as ROI-undefined); unrecognized
/// priority falls back to Low; completion timestamps are dropped unless
/// the task is actually Done.
///
/// Rejections: missing/empty id or title, missing or unparseable
/// createdAt, non-numeric revenue/hours, unrecognized status.
pub fn normalize(records: &[RawTask], tz: &str) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for (index, raw) in records.iter().enumerate() {
        match normalize_one(raw, tz) {
            Ok(task) => report.tasks.push(task),
            Err(reason) => report.rejected.push(RejectedRecord { index, reason }),
        }
    }

    report
}

fn normalize_one(raw: &RawTask, tz: &str) -> Result<Task, String> {
    let id = non_empty(raw.id.as_deref()).ok_or("missing id")?;
    let title = non_empty(raw.title.as_deref()).ok_or("missing title")?;

    let revenue = match coerce_number(&raw.revenue) {
        NumberField::Value(v) => v,
        NumberField::Missing => 0.0,
        NumberField::Unparseable => return Err(format!("unparseable revenue: {}", raw.revenue)),
    };
    let time_taken = match coerce_number(&raw.time_taken) {
        NumberField::Value(v) => v,
        NumberField::Missing => 0.0,
        NumberField::Unparseable => {
            return Err(format!("unparseable timeTaken: {}", raw.time_taken));
        }
    };

    let priority = parse_priority(raw.priority.as_deref());
    let status = parse_status(raw.status.as_deref())?;

    let created_at = raw
        .created_at
        .as_deref()
        .ok_or("missing createdAt")
        .and_then(|s| parse_timestamp(s, tz).ok_or("unparseable createdAt"))?;

    // A completion date on a task that never reached Done is stale data
    // from the source; drop it rather than let it skew velocity.
    let completed_at = if status == TaskStatus::Done {
        raw.completed_at
            .as_deref()
            .and_then(|s| parse_timestamp(s, tz))
    } else {
        None
    };

    Ok(Task {
        id: id.to_string(),
        title: title.to_string(),
        revenue,
        time_taken,
        priority,
        status,
        created_at,
        completed_at,
    })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Unknown priorities sink to Low (weight 1) rather than failing.
fn parse_priority(s: Option<&str>) -> Priority {
    match s.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("high") | Some("urgent") => Priority::High,
        Some("medium") | Some("normal") => Priority::Medium,
        _ => Priority::Low,
    }
}

/// Missing status means the task was never started; anything we cannot
/// recognize is a malformed record.
fn parse_status(s: Option<&str>) -> Result<TaskStatus, String> {
    let Some(s) = s else {
        return Ok(TaskStatus::Todo);
    };
    match s.trim().to_lowercase().as_str() {
        "todo" | "to do" | "to-do" | "open" => Ok(TaskStatus::Todo),
        "in progress" | "in-progress" | "inprogress" | "doing" => Ok(TaskStatus::InProgress),
        "done" | "complete" | "completed" | "closed" => Ok(TaskStatus::Done),
        other => Err(format!("unrecognized status: {other}")),
    }
}

/// RFC 3339 first, then naive local formats in the configured timezone.
fn parse_timestamp(s: &str, tz: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_local_to_utc(s, tz).ok()
}
