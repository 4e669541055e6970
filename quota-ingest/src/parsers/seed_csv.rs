//! CSV seed parser.
//!
//! Expected header row (order-free, case-insensitive, both camelCase and
//! snake_case accepted):
//!   id,title,revenue,timeTaken,priority,status,createdAt,completedAt
//!
//! Rows are carried over as loosely typed [`RawTask`]s; numeric and date
//! cleanup happens in `normalize`.

use crate::raw::RawTask;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::Path;

/// Parse a CSV seed file.
pub fn parse_seed_csv(path: impl AsRef<Path>) -> Result<Vec<RawTask>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_records(&mut rdr)
}

/// Parse CSV seed text already in memory.
pub fn parse_seed_csv_text(text: &str) -> Result<Vec<RawTask>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    parse_records(&mut rdr)
}

fn parse_records<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<RawTask>> {
    let headers = rdr.headers().context("reading CSV header")?.clone();

    let col = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| {
            let h = h.trim().to_lowercase().replace(['_', ' '], "");
            names.iter().any(|n| h == *n)
        })
    };

    let id_col = col(&["id"]);
    let title_col = col(&["title", "name"]);
    let revenue_col = col(&["revenue", "amount", "value"]);
    let time_col = col(&["timetaken", "hours"]);
    let priority_col = col(&["priority"]);
    let status_col = col(&["status"]);
    let created_col = col(&["createdat", "created"]);
    let completed_col = col(&["completedat", "completed"]);

    if id_col.is_none() && title_col.is_none() {
        bail!("CSV has neither an id nor a title column; wrong file?");
    }

    let cell = |record: &csv::StringRecord, idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let mut out = Vec::new();
    for result in rdr.records() {
        // One mangled row should not sink the whole seed file.
        let Ok(record) = result else {
            continue;
        };

        let string_value = |idx: Option<usize>| {
            cell(&record, idx).map(Value::String).unwrap_or(Value::Null)
        };

        out.push(RawTask {
            id: cell(&record, id_col),
            title: cell(&record, title_col),
            revenue: string_value(revenue_col),
            time_taken: string_value(time_col),
            priority: cell(&record, priority_col),
            status: cell(&record, status_col),
            created_at: cell(&record, created_col),
            completed_at: cell(&record, completed_col),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{NumberField, coerce_number};

    #[test]
    fn test_parse_basic_csv() {
        let text = "\
id,title,revenue,timeTaken,priority,status,createdAt,completedAt
s-1,Acme renewal,\"$1,000\",10,High,Done,2024-03-01T09:00:00Z,2024-03-04T17:00:00Z
s-2,Globex upsell,500,,Low,Todo,2024-03-02T09:00:00Z,
";
        let records = parse_seed_csv_text(text).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.id.as_deref(), Some("s-1"));
        assert_eq!(coerce_number(&first.revenue), NumberField::Value(1000.0));
        assert_eq!(first.status.as_deref(), Some("Done"));

        let second = &records[1];
        assert_eq!(coerce_number(&second.time_taken), NumberField::Missing);
        assert!(second.completed_at.is_none());
    }

    #[test]
    fn test_snake_case_headers() {
        let text = "\
id,title,revenue,time_taken,priority,status,created_at,completed_at
s-1,Acme,100,2,High,Done,2024-03-01,2024-03-03
";
        let records = parse_seed_csv_text(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(coerce_number(&records[0].time_taken), NumberField::Value(2.0));
        assert_eq!(records[0].created_at.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_unrecognizable_csv_fails() {
        let text = "color,shape\nred,circle\n";
        assert!(parse_seed_csv_text(text).is_err());
    }
}
