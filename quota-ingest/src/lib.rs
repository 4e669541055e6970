//! quota-ingest: boundary validation between untrusted seed data and the
//! analytics engine. Loose record shapes, seed parsers (JSON/CSV), and
//! the normalization pass that produces typed tasks.

pub mod normalize;
pub mod parsers;
pub mod raw;

pub use normalize::{NormalizeReport, RejectedRecord, normalize};
pub use parsers::{parse_seed_csv, parse_seed_csv_text, parse_seed_json};
pub use raw::{NumberField, RawTask, coerce_number, currency_to_f64};
