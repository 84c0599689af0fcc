//! # Pipe Classification
//!
//! Pipe segments and the rules that decide which network tier a pipe
//! belongs to. Authoring tools do not always record the tier, so it is
//! resolved from an ordered list of rules:
//!
//! 1. Explicit `tier` / `type` field
//! 2. Display color lookup
//! 3. Secondary stroke color lookup (only when the display color is absent)
//! 4. Lateral
//!
//! The first rule that yields a tier wins. Each rule is a plain function in
//! [`CLASSIFICATION_RULES`] and the color table is [`COLOR_TIERS`], so either
//! can change without touching the network statistics.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::pipes::{classify, PipeSegment, PipeTier};
//!
//! let mut pipe = PipeSegment::new("p1", vec![]);
//! pipe.color = Some("#Blue".to_string());
//! assert_eq!(classify(&pipe), PipeTier::Main);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PlanError;
use crate::geometry::Coordinate;

/// Hierarchy level of a pipe in the irrigation network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeTier {
    /// Trunk line from the water source
    Main,
    /// Distribution line feeding laterals
    Submain,
    /// Line carrying the emitters along a crop row
    Lateral,
}

impl PipeTier {
    /// All tiers from trunk to row
    pub const ALL: [PipeTier; 3] = [PipeTier::Main, PipeTier::Submain, PipeTier::Lateral];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipeTier::Main => "main",
            PipeTier::Submain => "submain",
            PipeTier::Lateral => "lateral",
        }
    }
}

impl fmt::Display for PipeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipeTier {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(PipeTier::Main),
            "submain" => Ok(PipeTier::Submain),
            "lateral" => Ok(PipeTier::Lateral),
            other => Err(PlanError::invalid_input(
                "tier",
                other,
                "Expected one of main, submain, lateral",
            )),
        }
    }
}

/// A drawn pipe: an ordered polyline with optional tier hints.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "pipe-7",
///   "type": "submain",
///   "coordinates": [
///     { "lat": 13.7001, "lng": 100.5001 },
///     { "lat": 13.7004, "lng": 100.5001 }
///   ],
///   "zone_id": "zone-1",
///   "color": "green"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipeSegment {
    pub id: String,

    /// Explicit tier, as recorded by the editor (free text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Older snapshots record the tier under `type`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub pipe_type: Option<String>,

    /// Polyline vertices; a usable pipe has at least two
    #[serde(default)]
    pub coordinates: Vec<Coordinate>,

    /// Zone the editor attached this pipe to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// Display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Secondary stroke color used by some drawing layers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
}

impl PipeSegment {
    pub fn new(id: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        PipeSegment {
            id: id.into(),
            coordinates,
            ..Default::default()
        }
    }

    /// Builder-style explicit tier
    pub fn with_tier(mut self, tier: PipeTier) -> Self {
        self.tier = Some(tier.as_str().to_string());
        self
    }

    /// Builder-style zone attachment
    pub fn with_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    /// At least two vertices, so the pipe has a length
    pub fn is_drawable(&self) -> bool {
        self.coordinates.len() >= 2
    }
}

/// Color fragment → tier, checked in order.
pub const COLOR_TIERS: &[(&str, PipeTier)] = &[
    ("blue", PipeTier::Main),
    ("green", PipeTier::Submain),
    ("orange", PipeTier::Lateral),
    ("purple", PipeTier::Lateral),
];

/// Tier for a color string by case-insensitive substring match.
pub fn tier_for_color(color: &str) -> Option<PipeTier> {
    let color = color.to_lowercase();
    COLOR_TIERS
        .iter()
        .find(|(fragment, _)| color.contains(fragment))
        .map(|(_, tier)| *tier)
}

/// A single classification rule: returns a tier when it applies.
pub type ClassificationRule = fn(&PipeSegment) -> Option<PipeTier>;

/// Classification rules in priority order.
pub const CLASSIFICATION_RULES: &[(&str, ClassificationRule)] = &[
    ("explicit_tier", explicit_tier),
    ("display_color", display_color_tier),
    ("stroke_color", stroke_color_tier),
];

/// Rule 1: the `tier` field, then the `type` field, when either is a valid tier.
pub fn explicit_tier(pipe: &PipeSegment) -> Option<PipeTier> {
    [&pipe.tier, &pipe.pipe_type]
        .into_iter()
        .flatten()
        .find_map(|raw| raw.parse().ok())
}

/// Rule 2: the display color.
pub fn display_color_tier(pipe: &PipeSegment) -> Option<PipeTier> {
    pipe.color.as_deref().and_then(tier_for_color)
}

/// Rule 3: the stroke color, consulted only when no display color is set.
/// A blank display color counts as unset.
pub fn stroke_color_tier(pipe: &PipeSegment) -> Option<PipeTier> {
    if pipe.color.as_deref().is_some_and(|color| !color.trim().is_empty()) {
        return None;
    }
    pipe.stroke_color.as_deref().and_then(tier_for_color)
}

/// Resolve the tier of a pipe. Falls back to [`PipeTier::Lateral`].
pub fn classify(pipe: &PipeSegment) -> PipeTier {
    for (name, rule) in CLASSIFICATION_RULES {
        if let Some(tier) = rule(pipe) {
            log::trace!("Pipe {} classified as {} by {}", pipe.id, tier, name);
            return tier;
        }
    }
    PipeTier::Lateral
}
