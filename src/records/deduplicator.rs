//! Streaming first-occurrence-wins deduplication.

use std::fmt;

use hashbrown::HashSet;
use tracing::debug;

use super::key::{derive_key, DedupKey};
use crate::models::Record;

/// Whether kept records are collected or only counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupMode {
    #[default]
    Collect,
    StatsOnly,
}

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Kept,
    Duplicate,
    NoKey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    pub total: u64,
    pub kept: u64,
    pub duplicates: u64,
    pub no_key: u64,
}

impl DedupStats {
    /// Share of rows removed as duplicates; `None` when nothing was read.
    pub fn dedup_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.duplicates as f64 / self.total as f64)
        }
    }
}

impl fmt::Display for DedupStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Deduplication Stats ===")?;
        writeln!(f, "Total rows read:     {}", grouped(self.total))?;
        writeln!(f, "Unique rows kept:    {}", grouped(self.kept))?;
        writeln!(f, "Duplicates removed:  {}", grouped(self.duplicates))?;
        if self.no_key > 0 {
            writeln!(
                f,
                "Rows with no key:    {} (skipped, no data_id or title+lat+lon)",
                grouped(self.no_key)
            )?;
        }
        match self.dedup_rate() {
            Some(rate) => write!(f, "Dedup rate:          {:.1}%", rate * 100.0),
            None => write!(f, "Dedup rate:          N/A"),
        }
    }
}

/// Decimal digits with comma thousands separators.
fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One dedup pass. The seen-set lives and dies with this value.
#[derive(Debug, Default)]
pub struct Deduplicator {
    mode: DedupMode,
    seen: HashSet<DedupKey>,
    kept: Vec<Record>,
    stats: DedupStats,
}

impl Deduplicator {
    pub fn new(mode: DedupMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn push(&mut self, record: Record) -> Outcome {
        self.stats.total += 1;

        let Some(key) = derive_key(&record) else {
            self.stats.no_key += 1;
            debug!("Row {} has no dedup key", self.stats.total);
            return Outcome::NoKey;
        };

        if self.seen.contains(&key) {
            self.stats.duplicates += 1;
            debug!("Row {} duplicates {:?}", self.stats.total, key);
            return Outcome::Duplicate;
        }

        self.seen.insert(key);
        self.stats.kept += 1;
        if self.mode == DedupMode::Collect {
            self.kept.push(record);
        }
        Outcome::Kept
    }

    pub fn stats(&self) -> DedupStats {
        self.stats
    }

    /// Kept records in input order, with the final tallies.
    pub fn finish(self) -> (Vec<Record>, DedupStats) {
        (self.kept, self.stats)
    }
}

/// Deduplicate an in-memory sequence of records.
pub fn dedup<I>(records: I, mode: DedupMode) -> (Vec<Record>, DedupStats)
where
    I: IntoIterator<Item = Record>,
{
    let mut deduplicator = Deduplicator::new(mode);
    for record in records {
        deduplicator.push(record);
    }
    deduplicator.finish()
}
