//! On-disk map format and its projection into normalized graph coordinates.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RouteError};
use crate::geometry::{mercator, Point};

/// Latitude limit of the square Web-Mercator world.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadKind {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Residential,
    Service,
    #[default]
    Unclassified,
    Footway,
}

impl RoadKind {
    pub fn is_routable(self) -> bool {
        !matches!(self, RoadKind::Footway)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapWay {
    pub id: i64,
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub kind: RoadKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub nodes: Vec<MapNode>,
    #[serde(default)]
    pub ways: Vec<MapWay>,
}

/// Normalized node positions plus the scale that turns one normalized unit into meters.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub points: Vec<Point>,
    pub metric_scale: f64,
}

impl MapData {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Bounds from the file, or the bounding box of all nodes when absent.
    pub fn effective_bounds(&self) -> Result<Bounds> {
        if let Some(b) = self.bounds {
            if !(b.min_lat <= b.max_lat && b.min_lon <= b.max_lon) {
                return Err(RouteError::InvalidBounds(format!("{:?}", b)));
            }
            return Ok(b);
        }
        let first = self.nodes.first().ok_or(RouteError::EmptyGraph)?;
        let mut b = Bounds { min_lat: first.lat, max_lat: first.lat, min_lon: first.lon, max_lon: first.lon };
        for n in &self.nodes[1..] {
            b.min_lat = b.min_lat.min(n.lat);
            b.max_lat = b.max_lat.max(n.lat);
            b.min_lon = b.min_lon.min(n.lon);
            b.max_lon = b.max_lon.max(n.lon);
        }
        Ok(b)
    }

    /// Projects every node with Web-Mercator and rescales so the min corner of the
    /// bounds sits at (0, 0) and the larger side spans 1.0.
    pub fn project(&self) -> Result<Projection> {
        let b = self.effective_bounds()?;
        let lo = mercator(b.min_lat, b.min_lon);
        let hi = mercator(b.max_lat, b.max_lon);
        let extent = (hi.x - lo.x).max(hi.y - lo.y);
        if !extent.is_finite() || extent <= 0.0 {
            return Err(RouteError::InvalidBounds(format!("degenerate extent {extent}")));
        }
        let points = self
            .nodes
            .iter()
            .map(|n| {
                if !(n.lat.abs() <= MAX_MERCATOR_LAT && n.lon.abs() <= 180.0) {
                    return Err(RouteError::InvalidNode { node: n.id, lat: n.lat, lon: n.lon });
                }
                let p = mercator(n.lat, n.lon);
                Ok(Point::new((p.x - lo.x) / extent, (p.y - lo.y) / extent))
            })
            .collect::<Result<Vec<_>>>()?;
        let center_lat = ((b.min_lat + b.max_lat) / 2.0).to_radians();
        Ok(Projection { points, metric_scale: extent * center_lat.cos() })
    }
}
