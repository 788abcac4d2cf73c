//! Spatial index for fast land polygon lookups.

use rstar::{RTree, RTreeObject, AABB};
use tracing::info;

use super::ray;
use crate::models::GeoPoint;
use crate::territory::LandPolygon;

/// Wrapper for R-tree indexing of land polygons
#[derive(Clone)]
struct IndexedPolygon {
    polygon: LandPolygon,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedPolygon {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedPolygon {
    fn new(polygon: LandPolygon) -> Option<Self> {
        let rect = polygon.bounding_rect()?;
        Some(Self {
            envelope: AABB::from_corners(
                [rect.min().x, rect.min().y],
                [rect.max().x, rect.max().y],
            ),
            polygon,
        })
    }
}

/// Land polygons indexed by bounding envelope (x = lon, y = lat).
///
/// Envelope hits are confirmed with the ray-casting test, so a point is
/// reported as land exactly when [`ray::contains_any`] would report it.
pub struct LandIndex {
    tree: RTree<IndexedPolygon>,
}

impl LandIndex {
    /// Build spatial index from land polygons
    pub fn build(polygons: &[LandPolygon]) -> Self {
        let indexed: Vec<IndexedPolygon> = polygons
            .iter()
            .filter(|p| p.vertices.len() >= 3)
            .cloned()
            .filter_map(IndexedPolygon::new)
            .collect();

        let tree = RTree::bulk_load(indexed);
        info!("Land index built with {} polygons", tree.size());

        Self { tree }
    }

    fn candidates(&self, point: GeoPoint) -> impl Iterator<Item = &IndexedPolygon> {
        let query_envelope = AABB::from_point([point.lon, point.lat]);
        self.tree.locate_in_envelope_intersecting(&query_envelope)
    }

    /// True if any land polygon contains the point
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.candidates(point)
            .any(|ip| ray::contains(point, &ip.polygon))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::territory::Territory;

    #[test]
    fn test_empty_index() {
        let index = LandIndex::build(&[]);
        assert!(index.is_empty());
        assert!(!index.contains(GeoPoint::new(1.35, 103.85)));
    }

    #[test]
    fn test_skips_degenerate_polygons() {
        let polygons = vec![
            LandPolygon::from_pairs("line", &[(0.0, 0.0), (1.0, 1.0)]),
            LandPolygon::from_pairs("tri", &[(0.0, 0.0), (0.0, 2.0), (2.0, 0.0)]),
        ];
        let index = LandIndex::build(&polygons);
        assert_eq!(index.len(), 1);
        assert!(index.contains(GeoPoint::new(0.5, 0.5)));
        assert!(!index.contains(GeoPoint::new(1.5, 1.5)));
    }

    #[test]
    fn test_matches_linear_scan() {
        let sg = Territory::singapore();
        let index = LandIndex::build(&sg.polygons);
        assert_eq!(index.len(), 5);

        let mut lat = 1.18;
        while lat <= 1.49 {
            let mut lon = 103.57;
            while lon <= 104.09 {
                let p = GeoPoint::new(lat, lon);
                assert_eq!(index.contains(p), ray::contains_any(p, &sg.polygons), "{p}");
                lon += 0.007;
            }
            lat += 0.007;
        }
    }

    #[test]
    fn test_overlapping_polygons() {
        // Jurong Island's rectangle overlaps the main island outline
        let sg = Territory::singapore();
        let p = GeoPoint::new(1.270, 103.690);
        let hits = sg.polygons.iter().filter(|poly| ray::contains(p, poly)).count();
        assert_eq!(hits, 2);
        assert!(LandIndex::build(&sg.polygons).contains(p));
    }
}
