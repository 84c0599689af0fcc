//! # Unit Types
//!
//! Type-safe wrappers for the units used in irrigation planning. These are
//! plain f64 newtypes that serialize as bare numbers.
//!
//! ## Units
//!
//! - Length: meters (m), centimeters (cm, used for crop spacing)
//! - Area: square meters (m²), rai (Thai land unit, 1 rai = 1600 m²)
//! - Volume: liters (L), cubic meters (m³ = 1000 L)
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::units::{Centimeters, Meters, Rai, SquareMeters};
//!
//! let spacing: Meters = Centimeters(250.0).into();
//! assert_eq!(spacing.0, 2.5);
//!
//! let area: Rai = SquareMeters(3200.0).into();
//! assert_eq!(area.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Square meters in one rai
pub const SQM_PER_RAI: f64 = 1600.0;

/// Square meters in one ngan (quarter rai)
pub const SQM_PER_NGAN: f64 = 400.0;

/// Square meters in one square wah
pub const SQM_PER_SQUARE_WAH: f64 = 4.0;

/// Liters in one cubic meter
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Area in rai
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rai(pub f64);

impl From<SquareMeters> for Rai {
    fn from(sqm: SquareMeters) -> Self {
        Rai(sqm.0 / SQM_PER_RAI)
    }
}

/// An area expressed the way Thai land deeds write it: whole rai, whole
/// ngan, and the remaining square wah.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThaiArea {
    pub rai: u64,
    pub ngan: u64,
    pub square_wah: f64,
}

impl From<SquareMeters> for ThaiArea {
    fn from(sqm: SquareMeters) -> Self {
        if !sqm.0.is_finite() || sqm.0 <= 0.0 {
            return ThaiArea::default();
        }
        let rai = (sqm.0 / SQM_PER_RAI).floor();
        let remainder = sqm.0 - rai * SQM_PER_RAI;
        let ngan = (remainder / SQM_PER_NGAN).floor();
        let square_wah = (remainder - ngan * SQM_PER_NGAN) / SQM_PER_SQUARE_WAH;
        ThaiArea {
            rai: rai as u64,
            ngan: ngan as u64,
            square_wah,
        }
    }
}

impl std::fmt::Display for ThaiArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{:.1}", self.rai, self.ngan, self.square_wah)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<Liters> for CubicMeters {
    fn from(l: Liters) -> Self {
        CubicMeters(l.0 / LITERS_PER_CUBIC_METER)
    }
}

// ============================================================================
// Scaling (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(Rai);
impl_arithmetic!(Liters);
impl_arithmetic!(CubicMeters);
