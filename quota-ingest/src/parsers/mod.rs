pub mod seed_csv;
pub mod seed_json;

pub use seed_csv::{parse_seed_csv, parse_seed_csv_text};
pub use seed_json::parse_seed_json;
