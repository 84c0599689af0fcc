//! # Geometry Kernel
//!
//! Spherical distance, polygon area and containment tests over
//! latitude/longitude coordinates, built on the `geo` crate. Everything here
//! is a pure function and none of it panics: degenerate or malformed input
//! produces a zero value (or `false`), never an error.
//!
//! ## Conventions
//!
//! - Distances use the haversine formula and areas the Chamberlain-Duquette
//!   spherical approximation, both on a sphere of radius [`EARTH_RADIUS_M`]
//! - Containment and segment projection work in the (lng, lat) plane
//!   (`x = lng`, `y = lat` on the `geo` side)
//! - Invalid vertices are dropped before a ring becomes a polygon, and an
//!   open ring is closed on a local copy; the input is never modified
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::geometry::{polygon_area, point_in_polygon, Coordinate};
//!
//! let ring = vec![
//!     Coordinate::new(13.7000, 100.5000),
//!     Coordinate::new(13.7000, 100.5010),
//!     Coordinate::new(13.7010, 100.5010),
//!     Coordinate::new(13.7010, 100.5000),
//! ];
//!
//! assert!(polygon_area(&ring) > 0.0);
//! assert!(point_in_polygon(&Coordinate::new(13.7005, 100.5005), &ring));
//! ```

use std::collections::HashSet;

use geo::{
    ChamberlainDuquetteArea, Closest, ClosestPoint, Contains, Coord, Distance, HaversineMeasure, Line, LineString,
    Point, Polygon,
};
use serde::{Deserialize, Serialize};

/// Equatorial earth radius in meters (WGS84 semi-major axis)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A geographic coordinate in degrees.
///
/// ## JSON Example
///
/// ```json
/// { "lat": 13.7563, "lng": 100.5018 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    /// Both components are finite and inside the geographic range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    fn key(&self) -> (u64, u64) {
        (self.lat.to_bits(), self.lng.to_bits())
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord { x: c.lng, y: c.lat }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lng, c.lat)
    }
}

fn sphere() -> HaversineMeasure {
    HaversineMeasure::new(EARTH_RADIUS_M)
}

/// Great-circle (haversine) distance between two coordinates, in meters.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    sphere().distance(Point::from(*a), Point::from(*b))
}

/// Length of a polyline in meters, rounded to the nearest meter.
///
/// Returns 0 for fewer than 2 points.
pub fn polyline_length(points: &[Coordinate]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let total: f64 = points.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum();
    if !total.is_finite() {
        log::warn!("Polyline length is not finite ({} points), using 0", points.len());
        return 0.0;
    }
    total.round()
}

/// Area of a polygon ring in square meters.
///
/// Invalid vertices are dropped first; with fewer than 3 distinct remaining
/// vertices the area is 0. Winding order does not matter.
pub fn polygon_area(ring: &[Coordinate]) -> f64 {
    let Some(polygon) = ring_polygon(ring) else {
        return 0.0;
    };

    let area = polygon.chamberlain_duquette_unsigned_area();
    if !area.is_finite() {
        log::warn!("Polygon area is not finite ({} vertices), using 0", ring.len());
        return 0.0;
    }
    area
}

/// Whether `point` lies strictly inside `ring`.
///
/// Invalid ring vertices are dropped first. Points exactly on an edge are
/// outside.
pub fn point_in_polygon(point: &Coordinate, ring: &[Coordinate]) -> bool {
    point.is_valid() && ring_polygon(ring).is_some_and(|polygon| polygon.contains(&Point::from(*point)))
}

/// Distance in meters from `point` to the closest point of the segment
/// `seg_start`..`seg_end`.
///
/// The projection happens in the (lng, lat) plane and is clamped to the
/// segment, so points beyond either end measure to that endpoint.
pub fn segment_distance(point: &Coordinate, seg_start: &Coordinate, seg_end: &Coordinate) -> f64 {
    let target = Point::from(*point);
    let closest = if seg_start == seg_end {
        Point::from(*seg_start)
    } else {
        match Line::new(Coord::from(*seg_start), Coord::from(*seg_end)).closest_point(&target) {
            Closest::Intersection(p) | Closest::SinglePoint(p) => p,
            Closest::Indeterminate => Point::from(*seg_start),
        }
    };

    let d = sphere().distance(target, closest);
    if d.is_finite() {
        d
    } else {
        log::warn!("Segment distance is not finite, using 0");
        0.0
    }
}

/// Smallest [`segment_distance`] from `point` to any segment of `path`.
///
/// A single-vertex path measures to that vertex; an empty path has no
/// distance.
pub fn polyline_distance(point: &Coordinate, path: &[Coordinate]) -> Option<f64> {
    match path {
        [] => None,
        [only] => Some(segment_distance(point, only, only)),
        _ => path
            .windows(2)
            .map(|seg| segment_distance(point, &seg[0], &seg[1]))
            .min_by(|a, b| a.total_cmp(b)),
    }
}

/// True if any single vertex of `path` lies inside `ring`.
///
/// Only vertices are tested: a path that crosses the ring without placing a
/// vertex inside it does not touch it.
pub fn path_touches_polygon(path: &[Coordinate], ring: &[Coordinate]) -> bool {
    let Some(polygon) = ring_polygon(ring) else {
        return false;
    };
    path.iter()
        .filter(|vertex| vertex.is_valid())
        .any(|vertex| polygon.contains(&Point::from(*vertex)))
}

/// The valid vertices of `ring` as a `geo` polygon, or `None` when fewer than
/// 3 distinct ones remain.
fn ring_polygon(ring: &[Coordinate]) -> Option<Polygon<f64>> {
    let valid: Vec<Coordinate> = ring.iter().copied().filter(Coordinate::is_valid).collect();
    if distinct_vertex_count(&valid) < 3 {
        return None;
    }
    let exterior: LineString<f64> = valid.into_iter().map(Coord::from).collect();
    Some(Polygon::new(exterior, vec![]))
}

fn distinct_vertex_count(ring: &[Coordinate]) -> usize {
    ring.iter().map(Coordinate::key).collect::<HashSet<_>>().len()
}
