//! Zone records: user-drawn polygonal sub-areas of a field.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Coordinate};

/// A polygonal sub-area of a field.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "zone-1",
///   "name": "North block",
///   "color": "#4CAF50",
///   "coordinates": [
///     { "lat": 13.7000, "lng": 100.5000 },
///     { "lat": 13.7000, "lng": 100.5010 },
///     { "lat": 13.7010, "lng": 100.5010 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Display color (carried through to reports, never interpreted)
    #[serde(default)]
    pub color: String,

    /// Polygon ring; may be open or closed
    #[serde(default)]
    pub coordinates: Vec<Coordinate>,
}

impl Zone {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Zone {
            id: id.into(),
            name: name.into(),
            color: String::new(),
            coordinates,
        }
    }

    /// Area of the zone polygon in m²
    pub fn area_sqm(&self) -> f64 {
        geometry::polygon_area(&self.coordinates)
    }

    /// Whether a point falls inside the zone polygon
    pub fn contains(&self, point: &Coordinate) -> bool {
        geometry::point_in_polygon(point, &self.coordinates)
    }
}

/// Find a zone by id.
pub fn find_zone<'a>(zones: &'a [Zone], zone_id: &str) -> Option<&'a Zone> {
    zones.iter().find(|zone| zone.id == zone_id)
}
