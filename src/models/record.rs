//! Scraped CSV rows addressed by field name.

use std::sync::Arc;

use csv::StringRecord;
use hashbrown::HashMap;

/// Header of a scrape CSV: column names plus a name -> index lookup.
#[derive(Debug, Clone)]
pub struct Schema {
    headers: StringRecord,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn new(headers: StringRecord) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            // Later columns win when a name repeats
            index.insert(name.to_string(), i);
        }
        Self { headers, index }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(|n| n.as_ref().to_string()).collect())
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn position(&self, field: &str) -> Option<usize> {
        self.index.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// One scraped row. Fields outside the recognized set are carried verbatim.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: StringRecord,
}

impl Record {
    /// Build a record, padding short rows with empty values and dropping
    /// values beyond the header width.
    pub fn new(schema: Arc<Schema>, values: StringRecord) -> Self {
        let width = schema.len();
        let values = if values.len() == width {
            values
        } else {
            let mut fitted: StringRecord = values.iter().take(width).collect();
            while fitted.len() < width {
                fitted.push_field("");
            }
            fitted
        };
        Self { schema, values }
    }

    pub fn from_values<I, S>(schema: Arc<Schema>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            schema,
            values.into_iter().map(|v| v.as_ref().to_string()).collect(),
        )
    }

    /// Value of a named field, `None` when the header lacks the column.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.schema
            .position(field)
            .and_then(|i| self.values.get(i))
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn values(&self) -> &StringRecord {
        &self.values
    }
}
