//! Ray-casting point-in-polygon test.
//!
//! A horizontal ray is cast from the point toward increasing longitude and
//! edge crossings are counted; an odd count means the point is inside.
//! Points lying exactly on an edge may land on either side.

use crate::models::GeoPoint;
use crate::territory::LandPolygon;

/// Test whether `point` lies inside the ring described by `vertices`.
pub fn ring_contains(point: GeoPoint, vertices: &[GeoPoint]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        // Half-open test: a vertex sitting on the ray's latitude counts once
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let dlat = b.lat - a.lat;
            if dlat != 0.0 {
                let crossing_lon = (b.lon - a.lon) * (point.lat - a.lat) / dlat + a.lon;
                if point.lon < crossing_lon {
                    inside = !inside;
                }
            }
        }
        j = i;
    }
    inside
}

pub fn contains(point: GeoPoint, polygon: &LandPolygon) -> bool {
    ring_contains(point, &polygon.vertices)
}

/// True if the point is inside at least one polygon. Stops at the first hit.
pub fn contains_any(point: GeoPoint, polygons: &[LandPolygon]) -> bool {
    polygons.iter().any(|polygon| contains(point, polygon))
}
