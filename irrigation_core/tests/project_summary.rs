//! End-to-end summary of a snapshot as the editor would hand it over.

use irrigation_core::planting::DensityStrategy;
use irrigation_core::{summarize_project, ProjectSnapshot};

const ORCHARD: &str = include_str!("fixtures/orchard.json");

fn orchard() -> ProjectSnapshot {
    ProjectSnapshot::from_json(ORCHARD).unwrap()
}

#[test]
fn test_fixture_is_consistent() {
    let snapshot = orchard();
    assert_eq!(snapshot.meta.name, "Chanthaburi orchard");
    assert!(snapshot.meta.modified.is_some());
    assert!(snapshot.validate().is_ok());
}

#[test]
fn test_assigned_zone() {
    let summary = summarize_project(&orchard());
    let a = &summary.zones[0];

    assert_eq!(a.zone_id, "zone-a");
    assert_eq!(a.crop_name, "Durian");
    assert_eq!(a.spacing.row_spacing_cm, 800.0);
    assert_eq!(a.spacing.plant_spacing_cm, 600.0);
    assert!(a.area_sqm > 11_000.0 && a.area_sqm < 13_000.0, "area = {}", a.area_sqm);

    // Project has pipes, so planting points follow the zone's single lateral:
    // 56 m at 6 m spacing -> 10 points
    assert_eq!(a.density_strategy, Some(DensityStrategy::PipeTraversal));
    assert_eq!(a.pipes.lateral.total_length, 56.0);
    assert_eq!(a.planting_points, 10);
    assert_eq!(a.water.per_irrigation_l, 2000.0);
    assert_eq!(a.water.monthly_m3, 60.0);

    let expected_yield = (a.area_sqm / 1600.0 * 1500.0).round();
    assert_eq!(a.estimated_yield_kg, expected_yield);
    assert_eq!(a.estimated_price, (expected_yield * 120.0).round());
    assert_eq!(a.growth_period_days, 120);
}

#[test]
fn test_zone_pipes() {
    let summary = summarize_project(&orchard());
    let a = &summary.zones[0];

    // main-1 is typed main despite its green color and has one vertex inside
    assert_eq!(a.pipes.main.count, 1);
    assert_eq!(a.pipes.main.total_length, 111.0);
    assert_eq!(a.pipes.submain.count, 1);
    assert_eq!(a.pipes.lateral.count, 1);
    assert_eq!(a.pipes.total, 3);
    assert_eq!(
        a.pipes.total_longest_length,
        a.pipes.main.longest_length + a.pipes.submain.longest_length + a.pipes.lateral.longest_length
    );

    // lat-2 is drawn far away but attached to zone-b by id
    let b = &summary.zones[1];
    assert_eq!(b.pipes.lateral.count, 1);
    assert_eq!(b.pipes.total, 1);
}

#[test]
fn test_unassigned_zone() {
    let summary = summarize_project(&orchard());
    let b = &summary.zones[1];

    assert_eq!(b.crop_name, "Not defined");
    assert_eq!(b.crop_value, None);
    assert_eq!(b.planting_points, 0);
    assert_eq!(b.estimated_yield_kg, 0.0);
    assert_eq!(b.water.per_irrigation_l, 0.0);
    assert!(b.area_sqm > 11_000.0);
    assert_eq!(b.emitters.drip_tape, 1);
    assert_eq!(b.emitters.total, 1);
}

#[test]
fn test_emitters() {
    let summary = summarize_project(&orchard());
    let a = &summary.zones[0];

    assert_eq!(a.emitters.mini_sprinkler, 2);
    // "Bubbler" has no bucket of its own
    assert_eq!(a.emitters.sprinkler, 1);
    assert_eq!(a.emitters.total, 3);

    let breakdown = &summary.totals.emitter_breakdown;
    assert_eq!(breakdown.get("mini_sprinkler"), Some(&2));
    assert_eq!(breakdown.get("bubbler"), Some(&1));
    assert_eq!(breakdown.get("drip_tape"), Some(&1));
    assert_eq!(breakdown.get("sprinkler"), Some(&1));
}

#[test]
fn test_totals() {
    let summary = summarize_project(&orchard());
    let totals = &summary.totals;

    assert_eq!(totals.zone_count, 2);
    assert_eq!(totals.assigned_zone_count, 1);
    assert_eq!(totals.planting_points, 10);
    assert_eq!(totals.water.per_irrigation_l, 2000.0);
    assert_eq!(totals.water.yearly_l, 730_000.0);
    assert_eq!(totals.emitters.total, 4);

    // Zone sums only see zone pipes; the project view sees all five
    assert_eq!(totals.zone_pipes.total, 4);
    assert_eq!(totals.project_pipes.main.count, 2);
    assert_eq!(totals.project_pipes.submain.count, 1);
    assert_eq!(totals.project_pipes.lateral.count, 2);
    assert_eq!(totals.project_pipes.total, 5);
}

#[test]
fn test_summary_is_repeatable() {
    let snapshot = orchard();
    let first = serde_json::to_value(summarize_project(&snapshot)).unwrap();
    let second = serde_json::to_value(summarize_project(&snapshot)).unwrap();
    assert_eq!(first, second);
}
