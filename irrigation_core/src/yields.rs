//! # Yield and Income
//!
//! Estimated harvest from zone area and the crop's yield per rai, and the
//! income that harvest fetches at the crop's unit price. Both figures are
//! rounded to whole units.

use serde::{Deserialize, Serialize};

use crate::crops::Crop;
use crate::units::{Rai, SquareMeters};

/// Yield and income estimate for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Estimated harvest (kg)
    pub estimated_yield_kg: f64,
    /// Estimated income (currency units)
    pub estimated_price: f64,
}

/// Estimate yield and income for a zone of `zone_area_sqm`.
pub fn per_zone(zone_area_sqm: f64, crop: &Crop) -> YieldEstimate {
    if !zone_area_sqm.is_finite() || zone_area_sqm <= 0.0 {
        return YieldEstimate::default();
    }

    let area = Rai::from(SquareMeters(zone_area_sqm));
    let estimated_yield_kg = (area.value() * crop.yield_per_rai()).round();
    let estimated_price = (estimated_yield_kg * crop.unit_price()).round();

    YieldEstimate {
        estimated_yield_kg,
        estimated_price,
    }
}
