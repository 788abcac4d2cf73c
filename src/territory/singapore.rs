//! Simplified land outline of Singapore.

use super::{LandPolygon, Territory};
use crate::models::BoundingBox;

const BBOX: BoundingBox = BoundingBox {
    lat_min: 1.20,
    lat_max: 1.47,
    lon_min: 103.59,
    lon_max: 104.07,
};

const REFERENCE_LATITUDE: f64 = 1.35;

/// Rough coastline, clockwise from Tuas.
const MAIN_ISLAND: &[(f64, f64)] = &[
    // Tuas
    (1.250, 103.618),
    (1.265, 103.600),
    (1.290, 103.601),
    (1.310, 103.620),
    (1.320, 103.642),
    // Lim Chu Kang, Kranji
    (1.355, 103.650),
    (1.385, 103.680),
    (1.415, 103.720),
    (1.430, 103.740),
    (1.445, 103.760),
    (1.450, 103.780),
    // Woodlands, Sembawang, Yishun
    (1.455, 103.800),
    (1.460, 103.830),
    (1.465, 103.860),
    (1.460, 103.880),
    (1.455, 103.900),
    (1.450, 103.920),
    // Punggol, Pasir Ris
    (1.420, 103.950),
    (1.400, 103.970),
    (1.385, 103.985),
    (1.370, 104.000),
    (1.360, 104.020),
    (1.345, 104.040),
    (1.330, 104.050),
    // Changi, East Coast
    (1.310, 104.050),
    (1.300, 104.035),
    (1.290, 103.990),
    (1.280, 103.950),
    // Marina
    (1.270, 103.910),
    (1.265, 103.870),
    (1.260, 103.830),
    (1.265, 103.800),
    (1.270, 103.770),
    // Jurong, Clementi
    (1.275, 103.740),
    (1.270, 103.710),
    (1.260, 103.680),
    (1.255, 103.650),
    (1.250, 103.618),
];

const SENTOSA: &[(f64, f64)] = &[
    (1.240, 103.825),
    (1.240, 103.860),
    (1.252, 103.860),
    (1.252, 103.825),
];

const JURONG_ISLAND: &[(f64, f64)] = &[
    (1.255, 103.660),
    (1.255, 103.720),
    (1.280, 103.720),
    (1.280, 103.660),
];

const PULAU_UBIN: &[(f64, f64)] = &[
    (1.395, 103.955),
    (1.395, 103.990),
    (1.420, 103.990),
    (1.420, 103.955),
];

const PULAU_TEKONG: &[(f64, f64)] = &[
    (1.380, 104.010),
    (1.380, 104.060),
    (1.420, 104.060),
    (1.420, 104.010),
];

pub(super) fn territory() -> Territory {
    let polygons = [
        ("main_island", MAIN_ISLAND),
        ("sentosa", SENTOSA),
        ("jurong_island", JURONG_ISLAND),
        ("pulau_ubin", PULAU_UBIN),
        ("pulau_tekong", PULAU_TEKONG),
    ]
    .into_iter()
    .map(|(name, pairs)| LandPolygon::from_pairs(name, pairs))
    .collect();

    Territory {
        name: "singapore".to_string(),
        bbox: BBOX,
        reference_latitude: REFERENCE_LATITUDE,
        polygons,
    }
}
