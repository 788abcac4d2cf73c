//! Dedup keys for scraped rows.

use crate::models::Record;

pub const DATA_ID: &str = "data_id";
pub const TITLE: &str = "title";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Identity of a scraped listing.
///
/// The two variants never compare equal, whatever their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// Listing identifier assigned by the source
    Identifier(String),
    /// Fallback when no identifier was scraped. Coordinates are kept as the
    /// raw text, so "1.3000" and "1.3" are different keys.
    Geometry {
        title: String,
        latitude: String,
        longitude: String,
    },
}

fn trimmed<'a>(record: &'a Record, field: &str) -> &'a str {
    record.get(field).unwrap_or("").trim()
}

/// Derive the key for a record, or `None` when it carries neither an
/// identifier nor a complete title + coordinates triple.
pub fn derive_key(record: &Record) -> Option<DedupKey> {
    let data_id = trimmed(record, DATA_ID);
    if !data_id.is_empty() {
        return Some(DedupKey::Identifier(data_id.to_string()));
    }

    let title = trimmed(record, TITLE);
    let latitude = trimmed(record, LATITUDE);
    let longitude = trimmed(record, LONGITUDE);
    if title.is_empty() || latitude.is_empty() || longitude.is_empty() {
        return None;
    }

    Some(DedupKey::Geometry {
        title: title.to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schema;
    use std::sync::Arc;

    fn record(values: [&str; 4]) -> Record {
        let schema = Arc::new(Schema::from_names([DATA_ID, TITLE, LATITUDE, LONGITUDE]));
        Record::from_values(schema, values)
    }

    #[test]
    fn test_identifier_is_trimmed() {
        let a = derive_key(&record(["abc", "", "", ""]));
        let b = derive_key(&record([" abc ", "Other", "1.0", "2.0"]));
        assert_eq!(a, Some(DedupKey::Identifier("abc".to_string())));
        assert_eq!(a, b);
    }

    #[test]
    fn test_geometry_fallback() {
        let key = derive_key(&record(["  ", " X ", "1.3", " 103.8"])).unwrap();
        assert_eq!(
            key,
            DedupKey::Geometry {
                title: "X".to_string(),
                latitude: "1.3".to_string(),
                longitude: "103.8".to_string(),
            }
        );
        assert_ne!(key, DedupKey::Identifier("X".to_string()));
    }

    #[test]
    fn test_coordinates_compared_as_text() {
        let a = derive_key(&record(["", "X", "1.3000", "103.8"]));
        let b = derive_key(&record(["", "X", "1.3", "103.8"]));
        assert!(a.is_some());
        assert_ne!(a, b);
    }

    #[test]
    fn test_incomplete_fallback_is_absent() {
        assert_eq!(derive_key(&record(["", "", "", ""])), None);
        assert_eq!(derive_key(&record(["", "X", "1.3", ""])), None);
        assert_eq!(derive_key(&record(["", "X", "  ", "103.8"])), None);
        assert_eq!(derive_key(&record(["", "", "1.3", "103.8"])), None);
    }

    #[test]
    fn test_missing_columns() {
        let schema = Arc::new(Schema::from_names(["name", "rating"]));
        let r = Record::from_values(schema, ["Cafe", "4.5"]);
        assert_eq!(derive_key(&r), None);

        let schema = Arc::new(Schema::from_names([TITLE, LATITUDE, LONGITUDE]));
        let r = Record::from_values(schema, ["Cafe", "1.3", "103.8"]);
        assert!(matches!(derive_key(&r), Some(DedupKey::Geometry { .. })));
    }
}
