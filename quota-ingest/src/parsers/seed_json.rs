//! JSON seed parser: an array of loosely typed task records.

use crate::raw::RawTask;
use anyhow::{Context, Result};

/// Parse a seed document. The top level must be an array; individual
/// records are allowed to be sparse or mistyped, that is `normalize`'s
/// problem.
pub fn parse_seed_json(text: &str) -> Result<Vec<RawTask>> {
    serde_json::from_str(text).context("seed document is not a JSON array of task records")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let text = r#"[
            {"id": "s-1", "title": "Acme renewal", "revenue": 1000, "timeTaken": "8"},
            {"title": "no id, still parses"}
        ]"#;
        let records = parse_seed_json(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("s-1"));
        assert!(records[1].id.is_none());
    }

    #[test]
    fn test_non_array_fails() {
        assert!(parse_seed_json(r#"{"id": "s-1"}"#).is_err());
        assert!(parse_seed_json("not json").is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let text = r#"[{"id": "s-1", "title": "x", "assignee": "dana", "color": "red"}]"#;
        let records = parse_seed_json(text).unwrap();
        assert_eq!(records.len(), 1);
    }
}
