//! Core data models for grid generation and deduplication.

pub mod point;
pub mod record;

pub use point::{BoundingBox, GeoPoint};
pub use record::{Record, Schema};
