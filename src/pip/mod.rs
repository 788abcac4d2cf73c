//! Point-in-Polygon (PIP) land lookup.
//!
//! Ray-casting containment over land polygons, with an R-tree envelope
//! index for repeated lookups against the same polygon set.

mod index;
pub mod ray;

pub use index::LandIndex;
pub use ray::{contains, contains_any};
