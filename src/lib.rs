//! Landgrid - scrape planning and cleanup for point-of-interest collection.
//!
//! This library provides shared types and modules for the grid and dedup binaries.

pub mod error;
pub mod models;
pub mod pip;
pub mod records;
pub mod sampling;
pub mod territory;

pub use error::{Error, Result};
pub use models::{BoundingBox, GeoPoint, Record, Schema};
pub use territory::{LandPolygon, Territory};
