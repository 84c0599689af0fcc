//! # Crops
//!
//! Crop parameters and per-zone crop assignments.
//!
//! Every numeric crop field is optional on the wire. A missing field reads
//! as zero, and zero-valued parameters make the derived planting, water and
//! yield figures zero rather than producing an error.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::crops::{Crop, ZoneCropAssignment};
//!
//! let durian = Crop {
//!     value: "durian".to_string(),
//!     name: "Durian".to_string(),
//!     row_spacing_cm: Some(800.0),
//!     plant_spacing_cm: Some(800.0),
//!     ..Default::default()
//! };
//!
//! let assignment = ZoneCropAssignment::new("zone-1", "durian").with_plant_spacing(700.0);
//! let spacing = assignment.resolve_spacing(&durian);
//! assert_eq!(spacing.row_spacing_cm, 800.0);
//! assert_eq!(spacing.plant_spacing_cm, 700.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Centimeters, Meters};

/// Agronomic parameters for one crop.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": "mango",
///   "name": "Mango",
///   "row_spacing_cm": 600,
///   "plant_spacing_cm": 600,
///   "water_requirement_per_plant_l": 50,
///   "yield_per_rai_kg": 1200,
///   "price_per_kg": 25,
///   "growth_period_days": 120
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    /// Catalog key referenced by assignments
    pub value: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Distance between rows (cm)
    #[serde(default)]
    pub row_spacing_cm: Option<f64>,

    /// Distance between plants within a row (cm)
    #[serde(default)]
    pub plant_spacing_cm: Option<f64>,

    /// Water per plant per irrigation (L)
    #[serde(default)]
    pub water_requirement_per_plant_l: Option<f64>,

    /// Yield per rai (kg)
    #[serde(default)]
    pub yield_per_rai_kg: Option<f64>,

    /// Price per kg (currency units)
    #[serde(default)]
    pub price_per_kg: Option<f64>,

    /// Days from planting to harvest
    #[serde(default)]
    pub growth_period_days: Option<u32>,
}

impl Crop {
    pub fn water_per_plant(&self) -> f64 {
        non_negative(self.water_requirement_per_plant_l)
    }

    pub fn yield_per_rai(&self) -> f64 {
        non_negative(self.yield_per_rai_kg)
    }

    pub fn unit_price(&self) -> f64 {
        non_negative(self.price_per_kg)
    }

    pub fn growth_period(&self) -> u32 {
        self.growth_period_days.unwrap_or(0)
    }
}

/// Missing, negative and non-finite values read as 0.
fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Crop assigned to a zone, with optional spacing overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneCropAssignment {
    pub zone_id: String,

    /// [`Crop::value`] of the assigned crop
    pub crop_value: String,

    /// Row spacing override (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_spacing_cm: Option<f64>,

    /// Plant spacing override (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_spacing_cm: Option<f64>,
}

impl ZoneCropAssignment {
    pub fn new(zone_id: impl Into<String>, crop_value: impl Into<String>) -> Self {
        ZoneCropAssignment {
            zone_id: zone_id.into(),
            crop_value: crop_value.into(),
            row_spacing_cm: None,
            plant_spacing_cm: None,
        }
    }

    pub fn with_row_spacing(mut self, cm: f64) -> Self {
        self.row_spacing_cm = Some(cm);
        self
    }

    pub fn with_plant_spacing(mut self, cm: f64) -> Self {
        self.plant_spacing_cm = Some(cm);
        self
    }

    /// Effective spacing: override if set, crop default otherwise.
    pub fn resolve_spacing(&self, crop: &Crop) -> Spacing {
        Spacing::resolve(crop, self.row_spacing_cm, self.plant_spacing_cm)
    }
}

/// Effective row and plant spacing for a zone (cm). Zero means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub row_spacing_cm: f64,
    pub plant_spacing_cm: f64,
}

impl Spacing {
    /// Resolve spacing from overrides, falling back to the crop defaults.
    pub fn resolve(crop: &Crop, row_override_cm: Option<f64>, plant_override_cm: Option<f64>) -> Self {
        Spacing {
            row_spacing_cm: non_negative(row_override_cm.or(crop.row_spacing_cm)),
            plant_spacing_cm: non_negative(plant_override_cm.or(crop.plant_spacing_cm)),
        }
    }

    pub fn row_spacing_m(&self) -> f64 {
        Meters::from(Centimeters(self.row_spacing_cm)).value()
    }

    pub fn plant_spacing_m(&self) -> f64 {
        Meters::from(Centimeters(self.plant_spacing_cm)).value()
    }
}

/// Find a crop by catalog key.
pub fn find_crop<'a>(crops: &'a [Crop], value: &str) -> Option<&'a Crop> {
    crops.iter().find(|crop| crop.value == value)
}

/// Find the assignment for a zone. The first assignment wins if several
/// name the same zone.
pub fn find_assignment<'a>(assignments: &'a [ZoneCropAssignment], zone_id: &str) -> Option<&'a ZoneCropAssignment> {
    assignments.iter().find(|a| a.zone_id == zone_id)
}
