//! Wire-shape task records as fetched from a seed source.
//!
//! Everything is optional or loosely typed on purpose: seed exports mix
//! numbers with currency strings and omit fields freely. `normalize`
//! decides what survives into a typed [`quota_core::Task`].

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

/// A raw record before boundary validation.
///
/// camelCase keys as the seed sources emit them; snake_case aliases so a
/// previously normalized snapshot reads back in too.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,

    /// Number or string; "$1,234.56" forms accepted.
    #[serde(default)]
    pub revenue: Value,

    /// Hours, number or string.
    #[serde(default, alias = "time_taken")]
    pub time_taken: Value,

    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default, alias = "completed_at")]
    pub completed_at: Option<String>,
}

/// Result of coercing one loosely typed numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberField {
    Missing,
    Value(f64),
    Unparseable,
}

/// Coerce a JSON value to a number. Strings get currency cleanup first;
/// anything else (objects, arrays, booleans) is unparseable.
pub fn coerce_number(v: &Value) -> NumberField {
    match v {
        Value::Null => NumberField::Missing,
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => NumberField::Value(f),
            _ => NumberField::Unparseable,
        },
        Value::String(s) if s.trim().is_empty() => NumberField::Missing,
        Value::String(s) => match currency_to_f64(s) {
            Some(f) => NumberField::Value(f),
            None => NumberField::Unparseable,
        },
        _ => NumberField::Unparseable,
    }
}

/// Parse ordinary numeric strings plus "$1,234.56" currency forms and
/// "(500)" accounting negatives.
pub fn currency_to_f64(s: &str) -> Option<f64> {
    static CLEANUP: OnceLock<Regex> = OnceLock::new();
    let cleanup = CLEANUP.get_or_init(|| {
        Regex::new(r"[$,\s]").expect("static pattern")
    });

    let s = s.trim();
    let (s, negate) = match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => (inner, true),
        None => (s, false),
    };

    let cleaned = cleanup.replace_all(s, "");
    let n: f64 = cleaned.parse().ok()?;
    let n = if negate { -n } else { n };
    n.is_finite().then_some(n)
}
