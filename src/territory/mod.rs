//! Scan territories: bounding box, reference latitude and land polygons.
//!
//! A territory is immutable once built and is handed to the grid generator
//! by value or reference; nothing here is global state.

mod singapore;

use std::fs;
use std::path::Path;

use geo::{BoundingRect, Coord, LineString, Polygon, Rect};
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{BoundingBox, GeoPoint};

/// A closed land ring. The last vertex implicitly connects to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct LandPolygon {
    pub name: String,
    pub vertices: Vec<GeoPoint>,
}

impl LandPolygon {
    pub fn new(name: impl Into<String>, vertices: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    pub fn from_pairs(name: impl Into<String>, pairs: &[(f64, f64)]) -> Self {
        Self::new(
            name,
            pairs.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect(),
        )
    }

    /// The ring as a `geo` polygon (x = lon, y = lat).
    pub fn to_geo(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .vertices
            .iter()
            .map(|p| Coord { x: p.lon, y: p.lat })
            .collect();
        Polygon::new(LineString::new(coords), vec![])
    }

    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.to_geo().bounding_rect()
    }

    fn validate(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(Error::InvalidTerritory(format!(
                "polygon '{}' has {} vertices, need at least 3",
                self.name,
                self.vertices.len()
            )));
        }
        if let Some(p) = self.vertices.iter().find(|p| !p.is_finite()) {
            return Err(Error::InvalidTerritory(format!(
                "polygon '{}' has non-finite vertex {:?}",
                self.name, p
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Territory {
    pub name: String,
    pub bbox: BoundingBox,
    /// Latitude used for the single longitude-step correction.
    pub reference_latitude: f64,
    pub polygons: Vec<LandPolygon>,
}

impl Territory {
    pub fn new(
        name: impl Into<String>,
        bbox: BoundingBox,
        reference_latitude: f64,
        polygons: Vec<LandPolygon>,
    ) -> Result<Self> {
        let territory = Self {
            name: name.into(),
            bbox,
            reference_latitude,
            polygons,
        };
        territory.validate()?;
        Ok(territory)
    }

    /// Singapore: main island, Sentosa, Jurong Island, Pulau Ubin, Pulau Tekong.
    pub fn singapore() -> Self {
        singapore::territory()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let territory = Self::from_toml(&content)?;
        info!(
            "Loaded territory '{}' with {} polygons from {}",
            territory.name,
            territory.polygons.len(),
            path.display()
        );
        Ok(territory)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TerritoryConfig = toml::from_str(content)?;
        config.try_into()
    }

    fn validate(&self) -> Result<()> {
        if !self.bbox.is_valid() {
            return Err(Error::InvalidTerritory(format!(
                "bounding box {:?} is empty or not finite",
                self.bbox
            )));
        }
        if !self.reference_latitude.is_finite() || self.reference_latitude.abs() >= 90.0 {
            return Err(Error::InvalidTerritory(format!(
                "reference latitude {} is outside (-90, 90)",
                self.reference_latitude
            )));
        }
        if self.polygons.is_empty() {
            return Err(Error::InvalidTerritory("no land polygons".to_string()));
        }
        self.polygons.iter().try_for_each(LandPolygon::validate)
    }
}

/// On-disk territory layout. Vertices are `[lat, lon]` pairs.
#[derive(Debug, Deserialize)]
struct TerritoryConfig {
    name: String,
    reference_latitude: f64,
    bbox: BoundingBox,
    polygons: Vec<PolygonConfig>,
}

#[derive(Debug, Deserialize)]
struct PolygonConfig {
    name: String,
    vertices: Vec<[f64; 2]>,
}

impl TryFrom<TerritoryConfig> for Territory {
    type Error = Error;

    fn try_from(config: TerritoryConfig) -> Result<Self> {
        let polygons = config
            .polygons
            .into_iter()
            .map(|p| LandPolygon::new(p.name, p.vertices.into_iter().map(GeoPoint::from).collect()))
            .collect();
        Territory::new(config.name, config.bbox, config.reference_latitude, polygons)
    }
}
