//! Header-aware CSV reading and writing for scrape output.
//!
//! Paths ending in `.gz` are transparently (de)compressed.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecordsIntoIter, Writer};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Record, Schema};

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "gz")
}

/// Streams records from a CSV source after its header has been read.
pub struct RecordReader {
    schema: Arc<Schema>,
    rows: StringRecordsIntoIter<Box<dyn Read>>,
}

impl RecordReader {
    /// Read the header row. Fails with [`Error::MissingHeader`] before any
    /// data row is touched when the source has none.
    pub fn from_reader(reader: Box<dyn Read>) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(Error::MissingHeader);
        }

        Ok(Self {
            schema: Arc::new(Schema::new(headers)),
            rows: csv_reader.into_records(),
        })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };
        if row.len() > self.schema.len() {
            debug!(
                "Dropping {} values beyond the header on line {:?}",
                row.len() - self.schema.len(),
                row.position().map(|p| p.line())
            );
        }
        Some(Ok(Record::new(Arc::clone(&self.schema), row)))
    }
}

/// Open a scrape CSV for streaming.
pub fn open_records(path: &Path) -> Result<RecordReader> {
    info!("Reading records from {}", path.display());

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    RecordReader::from_reader(reader)
}

fn write_to<W: Write>(out: W, schema: &Schema, records: &[Record]) -> Result<W> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(schema.headers())?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Write records under the given header, preserving every column.
pub fn write_records(path: &Path, schema: &Schema, records: &[Record]) -> Result<()> {
    let file = File::create(path)?;
    if is_gzip(path) {
        let encoder = write_to(GzEncoder::new(file, Compression::default()), schema, records)?;
        encoder.finish()?;
    } else {
        let mut out = write_to(BufWriter::new(file), schema, records)?;
        out.flush()?;
    }

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
