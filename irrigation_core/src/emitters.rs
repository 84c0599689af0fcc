//! # Irrigation Points
//!
//! Emitters placed on the map and the tallies reported per zone.
//!
//! Editors record the emitter type as free text, so types are normalized
//! first: lower-cased, trimmed, and known spellings mapped onto four canonical
//! kinds. Anything else passes through as its own category.
//!
//! Per-zone counts only have the four canonical buckets. An emitter whose type
//! does not map to one of them is counted as a sprinkler.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::emitters::{normalize_type, EmitterKind};
//!
//! assert_eq!(normalize_type("Mini-Sprinkler"), "mini_sprinkler");
//! assert_eq!(normalize_type("  Valve "), "valve");
//! assert_eq!(EmitterKind::from_normalized("drip_tape"), Some(EmitterKind::DripTape));
//! ```

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;
use crate::zones::Zone;

/// The four canonical emitter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitterKind {
    Sprinkler,
    MiniSprinkler,
    MicroSpray,
    DripTape,
}

impl EmitterKind {
    pub const ALL: [EmitterKind; 4] = [
        EmitterKind::Sprinkler,
        EmitterKind::MiniSprinkler,
        EmitterKind::MicroSpray,
        EmitterKind::DripTape,
    ];

    /// Canonical type key
    pub fn key(&self) -> &'static str {
        match self {
            EmitterKind::Sprinkler => "sprinkler",
            EmitterKind::MiniSprinkler => "mini_sprinkler",
            EmitterKind::MicroSpray => "micro_spray",
            EmitterKind::DripTape => "drip_tape",
        }
    }

    /// Kind for an already-normalized type key
    pub fn from_normalized(key: &str) -> Option<EmitterKind> {
        EmitterKind::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// Known spellings, keyed after lower-casing and trimming.
static TYPE_ALIASES: Lazy<HashMap<&'static str, EmitterKind>> = Lazy::new(|| {
    let table: &[(&str, EmitterKind)] = &[
        ("sprinkler", EmitterKind::Sprinkler),
        ("sprinklers", EmitterKind::Sprinkler),
        ("sprinkler_head", EmitterKind::Sprinkler),
        ("sprinkler-head", EmitterKind::Sprinkler),
        ("สปริงเกอร์", EmitterKind::Sprinkler),
        ("mini_sprinkler", EmitterKind::MiniSprinkler),
        ("mini-sprinkler", EmitterKind::MiniSprinkler),
        ("mini sprinkler", EmitterKind::MiniSprinkler),
        ("minisprinkler", EmitterKind::MiniSprinkler),
        ("mini_sprinklers", EmitterKind::MiniSprinkler),
        ("มินิสปริงเกอร์", EmitterKind::MiniSprinkler),
        ("micro_spray", EmitterKind::MicroSpray),
        ("micro-spray", EmitterKind::MicroSpray),
        ("micro spray", EmitterKind::MicroSpray),
        ("microspray", EmitterKind::MicroSpray),
        ("micro_sprinkler", EmitterKind::MicroSpray),
        ("micro-sprinkler", EmitterKind::MicroSpray),
        ("micro sprinkler", EmitterKind::MicroSpray),
        ("ไมโครสเปรย์", EmitterKind::MicroSpray),
        ("drip_tape", EmitterKind::DripTape),
        ("drip-tape", EmitterKind::DripTape),
        ("drip tape", EmitterKind::DripTape),
        ("driptape", EmitterKind::DripTape),
        ("drip", EmitterKind::DripTape),
        ("dripper", EmitterKind::DripTape),
        ("drip_line", EmitterKind::DripTape),
        ("drip-line", EmitterKind::DripTape),
        ("เทปน้ำหยด", EmitterKind::DripTape),
    ];
    table.iter().copied().collect()
});

/// Normalize a raw emitter type.
///
/// Known spellings map to the canonical key of their [`EmitterKind`]; other
/// strings come back lower-cased and trimmed.
pub fn normalize_type(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase();
    match TYPE_ALIASES.get(cleaned.as_str()) {
        Some(kind) => kind.key().to_string(),
        None => cleaned,
    }
}

/// An emitter placed on the map.
///
/// ## JSON Example
///
/// ```json
/// { "id": "pt-3", "lat": 13.7002, "lng": 100.5004, "type": "Mini Sprinkler", "radius": 2.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationPoint {
    pub id: String,

    #[serde(flatten)]
    pub position: Coordinate,

    /// Emitter type as entered in the editor
    #[serde(default, rename = "type")]
    pub raw_type: String,

    /// Coverage radius (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl IrrigationPoint {
    pub fn new(id: impl Into<String>, position: Coordinate, raw_type: impl Into<String>) -> Self {
        IrrigationPoint {
            id: id.into(),
            position,
            raw_type: raw_type.into(),
            radius: None,
        }
    }

    /// Canonical bucket used by zone tallies; unknown types count as sprinklers.
    pub fn bucket(&self) -> EmitterKind {
        EmitterKind::from_normalized(&normalize_type(&self.raw_type)).unwrap_or(EmitterKind::Sprinkler)
    }
}

/// Emitter tallies for the four canonical kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmitterCounts {
    pub sprinkler: usize,
    pub mini_sprinkler: usize,
    pub micro_spray: usize,
    pub drip_tape: usize,
    pub total: usize,
}

impl EmitterCounts {
    fn record(&mut self, kind: EmitterKind) {
        match kind {
            EmitterKind::Sprinkler => self.sprinkler += 1,
            EmitterKind::MiniSprinkler => self.mini_sprinkler += 1,
            EmitterKind::MicroSpray => self.micro_spray += 1,
            EmitterKind::DripTape => self.drip_tape += 1,
        }
        self.total += 1;
    }

    /// Field-wise sum
    pub fn accumulate(&mut self, other: &EmitterCounts) {
        self.sprinkler += other.sprinkler;
        self.mini_sprinkler += other.mini_sprinkler;
        self.micro_spray += other.micro_spray;
        self.drip_tape += other.drip_tape;
        self.total += other.total;
    }
}

/// Count the emitters inside a zone polygon.
///
/// Points with invalid coordinates are skipped.
pub fn counts_for_zone(zone: &Zone, points: &[IrrigationPoint]) -> EmitterCounts {
    let mut counts = EmitterCounts::default();
    for point in points {
        if !point.position.is_valid() {
            log::warn!("Skipping irrigation point {} with invalid coordinates", point.id);
            continue;
        }
        if zone.contains(&point.position) {
            counts.record(point.bucket());
        }
    }
    counts
}

/// Project-wide count per normalized type, keeping unrecognized types apart.
pub fn breakdown_by_type(points: &[IrrigationPoint]) -> BTreeMap<String, usize> {
    let mut breakdown = BTreeMap::new();
    for point in points {
        *breakdown.entry(normalize_type(&point.raw_type)).or_insert(0) += 1;
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Zone {
        Zone::new(
            "z1",
            "Block",
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 1.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(1.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_normalize_known_variants() {
        assert_eq!(normalize_type("Mini-Sprinkler"), "mini_sprinkler");
        assert_eq!(normalize_type("  MICRO SPRAY "), "micro_spray");
        assert_eq!(normalize_type("Drip Tape"), "drip_tape");
        assert_eq!(normalize_type("sprinkler"), "sprinkler");
    }

    #[test]
    fn test_normalize_passes_through_unknown() {
        assert_eq!(normalize_type(" Pop-Up Rotor "), "pop-up rotor");
        assert_eq!(normalize_type(""), "");
    }

    #[test]
    fn test_counts_for_zone() {
        let points = vec![
            IrrigationPoint::new("a", Coordinate::new(0.5, 0.5), "Mini Sprinkler"),
            IrrigationPoint::new("b", Coordinate::new(0.2, 0.2), "drip-tape"),
            IrrigationPoint::new("c", Coordinate::new(0.3, 0.3), "micro-spray"),
            IrrigationPoint::new("d", Coordinate::new(5.0, 5.0), "sprinkler"),
        ];
        let counts = counts_for_zone(&zone(), &points);
        assert_eq!(counts.mini_sprinkler, 1);
        assert_eq!(counts.drip_tape, 1);
        assert_eq!(counts.micro_spray, 1);
        assert_eq!(counts.sprinkler, 0);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_unknown_type_counts_as_sprinkler() {
        let points = vec![IrrigationPoint::new("a", Coordinate::new(0.5, 0.5), "bubbler")];
        let counts = counts_for_zone(&zone(), &points);
        assert_eq!(counts.sprinkler, 1);
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn test_invalid_points_skipped() {
        let points = vec![IrrigationPoint::new("a", Coordinate::new(f64::NAN, 0.5), "sprinkler")];
        assert_eq!(counts_for_zone(&zone(), &points), EmitterCounts::default());
    }

    #[test]
    fn test_counts_survive_invalid_ring_vertex() {
        let mut zone = zone();
        zone.coordinates.insert(2, Coordinate::new(f64::NAN, 0.0));
        let points = vec![IrrigationPoint::new("a", Coordinate::new(0.5, 0.5), "drip tape")];

        let counts = counts_for_zone(&zone, &points);
        assert_eq!(counts.drip_tape, 1);
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn test_breakdown_keeps_unknown_types() {
        let points = vec![
            IrrigationPoint::new("a", Coordinate::new(0.5, 0.5), "Bubbler"),
            IrrigationPoint::new("b", Coordinate::new(0.5, 0.5), "mini sprinkler"),
            IrrigationPoint::new("c", Coordinate::new(9.0, 9.0), "Mini-Sprinkler"),
        ];
        let breakdown = breakdown_by_type(&points);
        assert_eq!(breakdown.get("bubbler"), Some(&1));
        assert_eq!(breakdown.get("mini_sprinkler"), Some(&2));
        assert!(!breakdown.contains_key("sprinkler"));
    }

    #[test]
    fn test_point_json_shape() {
        let json = r#"{"id": "p1", "lat": 13.7, "lng": 100.5, "type": "Sprinkler", "radius": 3.0}"#;
        let point: IrrigationPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.position, Coordinate::new(13.7, 100.5));
        assert_eq!(point.radius, Some(3.0));
        assert_eq!(point.bucket(), EmitterKind::Sprinkler);
    }
}
