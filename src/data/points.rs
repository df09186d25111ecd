//! Registry of placed pins with sequential ids.

use crate::data::geo::LatLon;
use crate::error::{PinError, Result};

/// Identifier of a placed pin, handed out sequentially from 0.
pub type PointId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub position: LatLon,
    /// Text shown on the marker; the id in decimal.
    pub label: String,
}

/// Append-only store of placed pins.
#[derive(Debug, Default, Clone)]
pub struct PointRegistry {
    points: Vec<Point>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new pin and return it. Ids are assigned in call order.
    pub fn add(&mut self, position: LatLon) -> &Point {
        let id = self.points.len();
        self.points.push(Point {
            id,
            position,
            label: id.to_string(),
        });
        &self.points[id]
    }

    pub fn add_lat_lon(&mut self, lat: f64, lon: f64) -> &Point {
        self.add(LatLon::new(lat, lon))
    }

    pub fn get(&self, id: PointId) -> Result<&Point> {
        self.points.get(id).ok_or(PinError::NotFound { id })
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Every label preceded by a single space, e.g. `" 0 1 2"`.
    pub fn ids_text(&self) -> String {
        self.points.iter().fold(String::new(), |mut s, p| {
            s.push(' ');
            s.push_str(&p.label);
            s
        })
    }

    /// Drop every pin and restart numbering at 0.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
