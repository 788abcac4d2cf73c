//! Land-only sample grid over a territory.
//!
//! Metric spacing is projected onto degrees once per run: a fixed latitude
//! step and a longitude step corrected by the cosine of the territory's
//! reference latitude. The longitude step is not recomputed per row, so rows
//! far from the reference latitude are slightly denser or sparser than the
//! nominal spacing. Downstream scrape estimates rely on the resulting count.

mod summary;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::GeoPoint;
use crate::pip::LandIndex;
use crate::territory::Territory;

pub use summary::{GridSummary, SECONDS_PER_POINT_HIGH, SECONDS_PER_POINT_LOW};

/// Mean meters per degree of latitude.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

pub const DEFAULT_SPACING_M: f64 = 250.0;

/// Per-axis step in degrees for a given metric spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularStep {
    pub lat: f64,
    pub lon: f64,
}

impl AngularStep {
    pub fn for_spacing(spacing_m: f64, reference_latitude: f64) -> Result<Self> {
        if !spacing_m.is_finite() || spacing_m <= 0.0 {
            return Err(Error::InvalidSpacing(spacing_m));
        }
        Ok(Self {
            lat: spacing_m / METERS_PER_DEGREE,
            lon: spacing_m / (METERS_PER_DEGREE * reference_latitude.to_radians().cos()),
        })
    }
}

/// Generates scrape coordinates for one territory.
///
/// Holds no state between calls: the same spacing always yields the same
/// points in the same order.
pub struct GridGenerator {
    territory: Territory,
    land: LandIndex,
}

impl GridGenerator {
    pub fn new(territory: Territory) -> Self {
        let land = LandIndex::build(&territory.polygons);
        Self { territory, land }
    }

    /// Land points in row-major order (latitude ascending, then longitude),
    /// rounded to 6 decimal places.
    ///
    /// Both axes step from the box minimum while `<=` the maximum, so
    /// accumulated float error may add or drop a row at the box edge.
    pub fn generate(&self, spacing_m: f64) -> Result<Vec<GeoPoint>> {
        let step = AngularStep::for_spacing(spacing_m, self.territory.reference_latitude)?;
        let bbox = self.territory.bbox;

        // The scan must advance at the box edge farthest from zero
        if !advances(bbox.lat_min, bbox.lat_max, step.lat)
            || !advances(bbox.lon_min, bbox.lon_max, step.lon)
        {
            return Err(Error::InvalidSpacing(spacing_m));
        }

        info!(
            "Generating {} grid at {}m (step {:.6} lat, {:.6} lon)",
            self.territory.name, spacing_m, step.lat, step.lon
        );

        let mut points = Vec::new();
        let mut rows = 0usize;
        let mut lat = bbox.lat_min;
        while lat <= bbox.lat_max {
            let row_start = points.len();
            let mut lon = bbox.lon_min;
            while lon <= bbox.lon_max {
                let candidate = GeoPoint::new(lat, lon);
                if self.land.contains(candidate) {
                    points.push(candidate.rounded());
                }
                lon += step.lon;
            }
            debug!("Row {} at lat {:.6}: {} land points", rows, lat, points.len() - row_start);
            lat += step.lat;
            rows += 1;
        }

        info!("Scanned {} rows, kept {} land points", rows, points.len());
        Ok(points)
    }

    pub fn summarize(&self, points: &[GeoPoint], spacing_m: f64) -> GridSummary {
        GridSummary::from_points(points, spacing_m)
    }
}

fn advances(min: f64, max: f64, step: f64) -> bool {
    let edge = min.abs().max(max.abs());
    edge + step > edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoundingBox;
    use crate::pip::contains_any;
    use crate::territory::LandPolygon;

    fn square_island() -> Territory {
        Territory::new(
            "square",
            BoundingBox::new(0.0, 0.1, 0.0, 0.1),
            0.0,
            vec![LandPolygon::from_pairs(
                "square",
                &[(0.02, 0.02), (0.02, 0.08), (0.08, 0.08), (0.08, 0.02)],
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_angular_step() {
        let step = AngularStep::for_spacing(111_320.0, 0.0).unwrap();
        assert_eq!(step.lat, 1.0);
        assert_eq!(step.lon, 1.0);

        let step = AngularStep::for_spacing(250.0, 60.0).unwrap();
        assert!((step.lon - 2.0 * step.lat).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_spacing() {
        for spacing in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                AngularStep::for_spacing(spacing, 1.35),
                Err(Error::InvalidSpacing(_))
            ));
        }
        let generator = GridGenerator::new(square_island());
        assert!(generator.generate(0.0).is_err());
        assert!(generator.generate(1e-300).is_err());
    }

    #[test]
    fn test_rejects_step_stalled_at_negative_edge() {
        // A 1e-9 m step still moves at lon 0.001 but not at lon -170
        let territory = Territory::new(
            "long-strip",
            BoundingBox::new(0.0, 0.001, -170.0, 0.001),
            0.0,
            vec![LandPolygon::from_pairs(
                "strip",
                &[(0.0, -170.0), (0.0, 0.0), (0.001, 0.0)],
            )],
        )
        .unwrap();
        let generator = GridGenerator::new(territory);
        assert!(matches!(
            generator.generate(1e-9),
            Err(Error::InvalidSpacing(_))
        ));
        assert!(advances(-170.0, 0.001, 1.0));
        assert!(!advances(-170.0, 0.001, 1e-14));
    }

    #[test]
    fn test_deterministic() {
        let generator = GridGenerator::new(Territory::singapore());
        let a = generator.generate(1000.0).unwrap();
        let b = generator.generate(1000.0).unwrap();
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_major_order() {
        let generator = GridGenerator::new(Territory::singapore());
        let points = generator.generate(1000.0).unwrap();
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.lat < b.lat || (a.lat == b.lat && a.lon < b.lon), "{a} then {b}");
        }
    }

    #[test]
    fn test_only_land_points() {
        let territory = Territory::singapore();
        let generator = GridGenerator::new(territory.clone());
        let step = AngularStep::for_spacing(500.0, territory.reference_latitude).unwrap();

        // Re-walk the lattice unrounded and compare against the linear scan
        let mut expected = Vec::new();
        let mut lat = territory.bbox.lat_min;
        while lat <= territory.bbox.lat_max {
            let mut lon = territory.bbox.lon_min;
            while lon <= territory.bbox.lon_max {
                let p = GeoPoint::new(lat, lon);
                if contains_any(p, &territory.polygons) {
                    expected.push(p.rounded());
                }
                lon += step.lon;
            }
            lat += step.lat;
        }
        assert_eq!(generator.generate(500.0).unwrap(), expected);
    }

    #[test]
    fn test_points_are_rounded() {
        let generator = GridGenerator::new(Territory::singapore());
        for p in generator.generate(2000.0).unwrap() {
            assert_eq!(p, p.rounded());
        }
    }

    #[test]
    fn test_halving_spacing_at_least_triples_count() {
        let generator = GridGenerator::new(square_island());
        let coarse = generator.generate(1000.0).unwrap().len();
        let fine = generator.generate(500.0).unwrap().len();
        assert!(coarse > 0);
        assert!(fine >= 3 * coarse, "{coarse} -> {fine}");

        let generator = GridGenerator::new(Territory::singapore());
        let coarse = generator.generate(500.0).unwrap().len();
        let fine = generator.generate(250.0).unwrap().len();
        assert!(fine >= 3 * coarse, "{coarse} -> {fine}");
    }

    #[test]
    fn test_singapore_default_spacing_count() {
        let generator = GridGenerator::new(Territory::singapore());
        let points = generator.generate(DEFAULT_SPACING_M).unwrap();
        assert_eq!(points.len(), 12_899);
        assert_eq!(points[0], GeoPoint::new(1.240424, 103.825872));
    }

    #[test]
    fn test_no_land_yields_empty_grid() {
        let territory = Territory::new(
            "open-sea",
            BoundingBox::new(10.0, 10.1, 10.0, 10.1),
            10.0,
            vec![LandPolygon::from_pairs(
                "elsewhere",
                &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
            )],
        )
        .unwrap();
        let generator = GridGenerator::new(territory);
        assert!(generator.generate(250.0).unwrap().is_empty());
    }
}
