use std::fmt;

use crate::models::GeoPoint;

/// Lower bound of the per-point scrape time budget.
pub const SECONDS_PER_POINT_LOW: f64 = 2.0;
/// Upper bound of the per-point scrape time budget.
pub const SECONDS_PER_POINT_HIGH: f64 = 4.0;

/// Point count and extent of a generated grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    pub spacing_m: f64,
    pub count: usize,
    /// (min, max); `None` for an empty grid
    pub lat_range: Option<(f64, f64)>,
    pub lon_range: Option<(f64, f64)>,
}

impl GridSummary {
    pub fn from_points(points: &[GeoPoint], spacing_m: f64) -> Self {
        Self {
            spacing_m,
            count: points.len(),
            lat_range: extent(points.iter().map(|p| p.lat)),
            lon_range: extent(points.iter().map(|p| p.lon)),
        }
    }

    /// Estimated downstream scrape duration in hours, (low, high).
    pub fn estimated_hours(&self) -> (f64, f64) {
        let n = self.count as f64;
        (
            n * SECONDS_PER_POINT_LOW / 3600.0,
            n * SECONDS_PER_POINT_HIGH / 3600.0,
        )
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl fmt::Display for GridSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid spacing: {}m", self.spacing_m)?;
        writeln!(f, "Total land points: {}", self.count)?;
        match self.lat_range {
            Some((lo, hi)) => writeln!(f, "Latitude range: {:.6} to {:.6}", lo, hi)?,
            None => writeln!(f, "Latitude range: N/A")?,
        }
        match self.lon_range {
            Some((lo, hi)) => writeln!(f, "Longitude range: {:.6} to {:.6}", lo, hi)?,
            None => writeln!(f, "Longitude range: N/A")?,
        }
        let (low, high) = self.estimated_hours();
        write!(
            f,
            "Estimated scrape time: {:.1} - {:.1} hours (at {}-{}s per cell)",
            low, high, SECONDS_PER_POINT_LOW, SECONDS_PER_POINT_HIGH
        )
    }
}
