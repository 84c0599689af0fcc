//! # Water Demand
//!
//! Water per irrigation is planting points × the crop's per-plant
//! requirement, rounded to whole liters. Monthly and yearly figures scale the
//! per-irrigation volume by the configured irrigation days.

use serde::{Deserialize, Serialize};

use crate::crops::Crop;
use crate::units::{CubicMeters, Liters};

/// Default irrigation days per month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Default irrigation days per year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Water volume per irrigation, per month and per year.
///
/// ## JSON Example
///
/// ```json
/// {
///   "per_irrigation_l": 5000.0,
///   "per_irrigation_m3": 5.0,
///   "monthly_l": 150000.0,
///   "monthly_m3": 150.0,
///   "yearly_l": 1825000.0,
///   "yearly_m3": 1825.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterDemand {
    pub per_irrigation_l: f64,
    pub per_irrigation_m3: f64,
    pub monthly_l: f64,
    pub monthly_m3: f64,
    pub yearly_l: f64,
    pub yearly_m3: f64,
}

impl WaterDemand {
    /// Expand a per-irrigation volume into monthly and yearly figures.
    pub fn from_per_irrigation(per_irrigation_l: f64, days_per_month: f64, days_per_year: f64) -> Self {
        let per_irrigation = Liters(per_irrigation_l);
        let monthly = per_irrigation * days_per_month;
        let yearly = per_irrigation * days_per_year;

        WaterDemand {
            per_irrigation_l: per_irrigation.value(),
            per_irrigation_m3: CubicMeters::from(per_irrigation).value(),
            monthly_l: monthly.value(),
            monthly_m3: CubicMeters::from(monthly).value(),
            yearly_l: yearly.value(),
            yearly_m3: CubicMeters::from(yearly).value(),
        }
    }
}

/// Liters needed for one irrigation of a zone.
pub fn per_zone(planting_points: u64, crop: &Crop) -> f64 {
    let per_plant = crop.water_per_plant();
    if planting_points == 0 || per_plant <= 0.0 {
        return 0.0;
    }
    (planting_points as f64 * per_plant).round()
}

/// Project water demand: per-irrigation volumes summed across zones.
pub fn project_demand<I>(per_zone_liters: I, days_per_month: f64, days_per_year: f64) -> WaterDemand
where
    I: IntoIterator<Item = f64>,
{
    let total: f64 = per_zone_liters.into_iter().sum();
    WaterDemand::from_per_irrigation(total, days_per_month, days_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(per_plant_l: Option<f64>) -> Crop {
        Crop {
            value: "test".to_string(),
            water_requirement_per_plant_l: per_plant_l,
            ..Default::default()
        }
    }

    #[test]
    fn test_per_zone() {
        assert_eq!(per_zone(100, &crop(Some(2.5))), 250.0);
        // 3 × 0.35 = 1.05 -> 1
        assert_eq!(per_zone(3, &crop(Some(0.35))), 1.0);
    }

    #[test]
    fn test_per_zone_missing_inputs() {
        assert_eq!(per_zone(0, &crop(Some(2.5))), 0.0);
        assert_eq!(per_zone(100, &crop(None)), 0.0);
    }

    #[test]
    fn test_project_demand() {
        let demand = project_demand([2000.0, 3000.0], DAYS_PER_MONTH, DAYS_PER_YEAR);
        assert_eq!(demand.per_irrigation_l, 5000.0);
        assert_eq!(demand.per_irrigation_m3, 5.0);
        assert_eq!(demand.monthly_l, 150_000.0);
        assert_eq!(demand.monthly_m3, 150.0);
        assert_eq!(demand.yearly_l, 1_825_000.0);
        assert_eq!(demand.yearly_m3, 1825.0);
    }

    #[test]
    fn test_empty_project_demand() {
        let demand = project_demand(Vec::new(), DAYS_PER_MONTH, DAYS_PER_YEAR);
        assert_eq!(demand, WaterDemand::default());
    }
}
