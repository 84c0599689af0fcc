//! # Zone and Project Summaries
//!
//! Assembles every per-zone metric into a [`ZoneSummary`] and rolls the
//! summaries up into [`ProjectTotals`]. This is the engine's main entry
//! point:
//!
//! ```text
//! ProjectSnapshot
//!   └─ for each zone
//!        ├─ area                      (geometry)
//!        ├─ spacing                   (crops)
//!        ├─ planting points           (planting, strategy chosen per project)
//!        ├─ yield / income            (yields)
//!        ├─ water demand              (water)
//!        ├─ pipe statistics           (network)
//!        └─ emitter counts            (emitters)
//!   └─ totals: sums + whole-project pipe statistics + emitter breakdown
//! ```
//!
//! Zones are independent of one another and nothing is cached between
//! calls, so the same snapshot always yields the same summary.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::geometry::Coordinate;
//! use irrigation_core::project::ProjectSnapshot;
//! use irrigation_core::summary::summarize_project;
//! use irrigation_core::zones::Zone;
//!
//! let snapshot = ProjectSnapshot {
//!     zones: vec![Zone::new("z1", "Block A", vec![
//!         Coordinate::new(13.7000, 100.5000),
//!         Coordinate::new(13.7000, 100.5010),
//!         Coordinate::new(13.7010, 100.5010),
//!     ])],
//!     ..Default::default()
//! };
//!
//! let summary = summarize_project(&snapshot);
//! assert_eq!(summary.zones[0].crop_name, "Not defined");
//! assert!(summary.totals.area_sqm > 0.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::crops::{find_assignment, find_crop, Crop, Spacing, ZoneCropAssignment};
use crate::emitters::{breakdown_by_type, counts_for_zone, EmitterCounts};
use crate::network::{project_pipe_stats, zone_pipe_stats, zone_pipes, NetworkStats};
use crate::planting::{area_density, choose_strategy, pipe_traversal_density, DensityStrategy};
use crate::project::ProjectSnapshot;
use crate::units::{Rai, SquareMeters, ThaiArea};
use crate::water::{self, WaterDemand};
use crate::yields;
use crate::zones::Zone;

/// Metrics for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone_id: String,
    pub zone_name: String,
    pub zone_color: String,

    /// Zone area (m²)
    pub area_sqm: f64,
    /// Zone area (rai)
    pub area_rai: f64,
    /// Zone area as rai-ngan-square wah
    pub area_thai: ThaiArea,

    /// Assigned crop key, if the zone has a usable assignment
    pub crop_value: Option<String>,
    /// Crop display name, or the unassigned label
    pub crop_name: String,
    pub growth_period_days: u32,

    /// Effective spacing (cm)
    pub spacing: Spacing,

    /// Strategy used for `planting_points`; absent for unassigned zones
    pub density_strategy: Option<DensityStrategy>,
    pub planting_points: u64,

    /// Estimated harvest (kg)
    pub estimated_yield_kg: f64,
    /// Estimated income (currency units)
    pub estimated_price: f64,

    pub water: WaterDemand,
    pub pipes: NetworkStats,
    pub emitters: EmitterCounts,
}

/// Project-wide sums.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectTotals {
    pub zone_count: usize,
    pub assigned_zone_count: usize,

    pub area_sqm: f64,
    pub area_rai: f64,

    pub planting_points: u64,
    pub estimated_yield_kg: f64,
    pub estimated_price: f64,

    pub water: WaterDemand,

    /// Sum of the per-zone pipe statistics (a pipe in two zones counts twice)
    pub zone_pipes: NetworkStats,
    /// Pipe statistics over every pipe in the project, ignoring zones
    pub project_pipes: NetworkStats,

    pub emitters: EmitterCounts,
    /// Every emitter in the project by normalized type
    pub emitter_breakdown: BTreeMap<String, usize>,
}

/// Zone summaries together with their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub zones: Vec<ZoneSummary>,
    pub totals: ProjectTotals,
}

/// Summarize one zone of a snapshot.
pub fn summarize_zone(zone: &Zone, snapshot: &ProjectSnapshot, strategy: DensityStrategy) -> ZoneSummary {
    let area_sqm = zone.area_sqm();
    let pipes = zone_pipe_stats(&snapshot.pipes, zone);
    let emitters = counts_for_zone(zone, &snapshot.irrigation_points);

    let mut summary = ZoneSummary {
        zone_id: zone.id.clone(),
        zone_name: zone.name.clone(),
        zone_color: zone.color.clone(),
        area_sqm,
        area_rai: Rai::from(SquareMeters(area_sqm)).value(),
        area_thai: ThaiArea::from(SquareMeters(area_sqm)),
        crop_value: None,
        crop_name: snapshot.settings.unassigned_crop_label.clone(),
        growth_period_days: 0,
        spacing: Spacing::default(),
        density_strategy: None,
        planting_points: 0,
        estimated_yield_kg: 0.0,
        estimated_price: 0.0,
        water: WaterDemand::default(),
        pipes,
        emitters,
    };

    if let Some((assignment, crop)) = resolve_crop(zone, snapshot) {
        apply_crop(&mut summary, zone, snapshot, strategy, assignment, crop);
    }

    log::debug!(
        "Zone {} ({}): {:.0} m², crop {}, {} planting points, {} emitters",
        summary.zone_id,
        summary.zone_name,
        summary.area_sqm,
        summary.crop_name,
        summary.planting_points,
        summary.emitters.total
    );
    summary
}

/// The zone's assignment and its crop, when both exist.
fn resolve_crop<'a>(zone: &Zone, snapshot: &'a ProjectSnapshot) -> Option<(&'a ZoneCropAssignment, &'a Crop)> {
    let assignment = find_assignment(&snapshot.assignments, &zone.id)?;
    match find_crop(&snapshot.crops, &assignment.crop_value) {
        Some(crop) => Some((assignment, crop)),
        None => {
            log::warn!(
                "Zone {} is assigned unknown crop '{}', treating it as unassigned",
                zone.id,
                assignment.crop_value
            );
            None
        }
    }
}

fn apply_crop(
    summary: &mut ZoneSummary,
    zone: &Zone,
    snapshot: &ProjectSnapshot,
    strategy: DensityStrategy,
    assignment: &ZoneCropAssignment,
    crop: &Crop,
) {
    let planting_points = match strategy {
        DensityStrategy::AreaDensity => area_density(
            summary.area_sqm,
            crop,
            assignment.row_spacing_cm,
            assignment.plant_spacing_cm,
        ),
        DensityStrategy::PipeTraversal => {
            pipe_traversal_density(zone_pipes(&snapshot.pipes, zone), crop, assignment.plant_spacing_cm)
        }
    };
    log::trace!("Zone {} planting points via {:?}: {}", zone.id, strategy, planting_points);

    let estimate = yields::per_zone(summary.area_sqm, crop);
    let settings = &snapshot.settings;

    summary.crop_value = Some(crop.value.clone());
    summary.crop_name = if crop.name.is_empty() { crop.value.clone() } else { crop.name.clone() };
    summary.growth_period_days = crop.growth_period();
    summary.spacing = assignment.resolve_spacing(crop);
    summary.density_strategy = Some(strategy);
    summary.planting_points = planting_points;
    summary.estimated_yield_kg = estimate.estimated_yield_kg;
    summary.estimated_price = estimate.estimated_price;
    summary.water = WaterDemand::from_per_irrigation(
        water::per_zone(planting_points, crop),
        settings.irrigation_days_per_month,
        settings.irrigation_days_per_year,
    );
}

/// Summarize every zone, in snapshot order.
pub fn summarize_zones(snapshot: &ProjectSnapshot) -> Vec<ZoneSummary> {
    let strategy = choose_strategy(snapshot.settings.density_policy, snapshot.has_pipes());
    log::debug!(
        "Summarizing {} zones with {:?} ({} pipes, {} irrigation points)",
        snapshot.zones.len(),
        strategy,
        snapshot.pipes.len(),
        snapshot.irrigation_points.len()
    );

    snapshot
        .zones
        .iter()
        .map(|zone| summarize_zone(zone, snapshot, strategy))
        .collect()
}

/// Roll zone summaries up into project totals.
pub fn project_totals(summaries: &[ZoneSummary], snapshot: &ProjectSnapshot) -> ProjectTotals {
    let mut totals = ProjectTotals {
        zone_count: summaries.len(),
        project_pipes: project_pipe_stats(&snapshot.pipes),
        emitter_breakdown: breakdown_by_type(&snapshot.irrigation_points),
        ..Default::default()
    };

    for summary in summaries {
        if summary.crop_value.is_some() {
            totals.assigned_zone_count += 1;
        }
        totals.area_sqm += summary.area_sqm;
        totals.area_rai += summary.area_rai;
        totals.planting_points += summary.planting_points;
        totals.estimated_yield_kg += summary.estimated_yield_kg;
        totals.estimated_price += summary.estimated_price;
        totals.zone_pipes.accumulate(&summary.pipes);
        totals.emitters.accumulate(&summary.emitters);
    }

    totals.water = water::project_demand(
        summaries.iter().map(|s| s.water.per_irrigation_l),
        snapshot.settings.irrigation_days_per_month,
        snapshot.settings.irrigation_days_per_year,
    );

    totals
}

/// Summarize a whole project.
pub fn summarize_project(snapshot: &ProjectSnapshot) -> ProjectSummary {
    let zones = summarize_zones(snapshot);
    let totals = project_totals(&zones, snapshot);
    ProjectSummary { zones, totals }
}
