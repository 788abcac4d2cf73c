//! Deduplication of scraped listings.

pub mod csv_io;
mod deduplicator;
pub mod key;

pub use csv_io::{open_records, write_records, RecordReader};
pub use deduplicator::{dedup, DedupMode, DedupStats, Deduplicator, Outcome};
pub use key::{derive_key, DedupKey};
