//! # Planting Density
//!
//! Estimates how many planting points a zone holds. Two strategies exist:
//!
//! - **Area density**: zone area divided by the row × plant spacing cell
//! - **Pipe traversal**: planting points laid along each lateral pipe at the
//!   plant spacing, counting both ends (`floor(length / spacing) + 1`)
//!
//! Which one applies is a project-level decision ([`choose_strategy`]): with
//! the default [`DensityPolicy::Auto`] any pipe anywhere in the project
//! switches every zone to pipe traversal, so a zone without laterals reports
//! zero planting points even though its area would suggest otherwise.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::crops::Crop;
//! use irrigation_core::planting::area_density;
//!
//! let lettuce = Crop {
//!     value: "lettuce".to_string(),
//!     row_spacing_cm: Some(25.0),
//!     plant_spacing_cm: Some(25.0),
//!     ..Default::default()
//! };
//!
//! // 1 ha at 16 plants per m²
//! assert_eq!(area_density(10_000.0, &lettuce, None, None), 160_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::crops::{Crop, Spacing};
use crate::geometry::polyline_length;
use crate::pipes::{classify, PipeSegment, PipeTier};

/// Project-wide rule for picking a density strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityPolicy {
    /// Pipe traversal when the project has any pipes, area density otherwise
    #[default]
    Auto,
    /// Always area density
    Area,
    /// Always pipe traversal
    PipeTraversal,
}

/// Strategy that produced a zone's planting count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityStrategy {
    AreaDensity,
    PipeTraversal,
}

/// Pick the strategy for every zone of a project.
pub fn choose_strategy(policy: DensityPolicy, project_has_pipes: bool) -> DensityStrategy {
    match policy {
        DensityPolicy::Area => DensityStrategy::AreaDensity,
        DensityPolicy::PipeTraversal => DensityStrategy::PipeTraversal,
        DensityPolicy::Auto if project_has_pipes => DensityStrategy::PipeTraversal,
        DensityPolicy::Auto => DensityStrategy::AreaDensity,
    }
}

/// Planting points from zone area and spacing.
///
/// Overrides (cm) take precedence over the crop's spacing. Returns 0 when
/// either spacing is unknown or the area is not positive.
pub fn area_density(
    zone_area_sqm: f64,
    crop: &Crop,
    row_override_cm: Option<f64>,
    plant_override_cm: Option<f64>,
) -> u64 {
    let spacing = Spacing::resolve(crop, row_override_cm, plant_override_cm);
    let (row_m, plant_m) = (spacing.row_spacing_m(), spacing.plant_spacing_m());
    if row_m <= 0.0 || plant_m <= 0.0 || !zone_area_sqm.is_finite() || zone_area_sqm <= 0.0 {
        return 0;
    }

    let plants_per_sqm = (1.0 / row_m) * (1.0 / plant_m);
    to_count((zone_area_sqm * plants_per_sqm).floor())
}

/// Planting points laid along the lateral pipes of a zone.
///
/// Non-lateral and undrawable pipes are ignored. The override (cm) replaces
/// the crop's plant spacing.
pub fn pipe_traversal_density<'a, I>(zone_pipes: I, crop: &Crop, plant_override_cm: Option<f64>) -> u64
where
    I: IntoIterator<Item = &'a PipeSegment>,
{
    let plant_m = Spacing::resolve(crop, None, plant_override_cm).plant_spacing_m();
    if plant_m <= 0.0 {
        return 0;
    }

    zone_pipes
        .into_iter()
        .filter(|pipe| pipe.is_drawable() && classify(pipe) == PipeTier::Lateral)
        .map(|pipe| to_count((polyline_length(&pipe.coordinates) / plant_m).floor()) + 1)
        .sum()
}

fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}
