//! # Pipe Network Statistics
//!
//! Rolls pipe lengths up per tier, per zone and for the whole project.
//!
//! ## Zone membership
//!
//! A pipe counts toward a zone when the editor attached it to that zone
//! **or** any of its vertices lies inside the zone polygon (see
//! [`pipe_in_zone`]). Both checks are always evaluated, so a pipe drawn
//! across two zones may count toward both.
//!
//! ## Totals
//!
//! `total_longest_length` is the sum of each tier's longest single pipe,
//! not the longest path through the network.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, path_touches_polygon};
use crate::pipes::{classify, PipeSegment, PipeTier};
use crate::zones::{find_zone, Zone};

/// Count and length statistics for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierStats {
    /// Number of drawable pipes in the tier
    pub count: usize,
    /// Sum of pipe lengths (m)
    pub total_length: f64,
    /// Length of the longest single pipe (m)
    pub longest_length: f64,
}

/// Per-tier statistics plus combined totals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "main": { "count": 2, "total_length": 150.0, "longest_length": 100.0 },
///   "submain": { "count": 1, "total_length": 30.0, "longest_length": 30.0 },
///   "lateral": { "count": 3, "total_length": 25.0, "longest_length": 10.0 },
///   "total_length": 205.0,
///   "total_longest_length": 140.0,
///   "total": 6
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkStats {
    pub main: TierStats,
    pub submain: TierStats,
    pub lateral: TierStats,
    /// Sum of the three tier totals (m)
    pub total_length: f64,
    /// Sum of the three tiers' longest pipes (m)
    pub total_longest_length: f64,
    /// Sum of the three tier counts
    pub total: usize,
}

impl NetworkStats {
    fn from_tiers(main: TierStats, submain: TierStats, lateral: TierStats) -> Self {
        NetworkStats {
            main,
            submain,
            lateral,
            total_length: main.total_length + submain.total_length + lateral.total_length,
            total_longest_length: main.longest_length + submain.longest_length + lateral.longest_length,
            total: main.count + submain.count + lateral.count,
        }
    }

    /// Field-wise sum, used for project totals
    pub fn accumulate(&mut self, other: &NetworkStats) {
        for (mine, theirs) in [
            (&mut self.main, &other.main),
            (&mut self.submain, &other.submain),
            (&mut self.lateral, &other.lateral),
        ] {
            mine.count += theirs.count;
            mine.total_length += theirs.total_length;
            mine.longest_length += theirs.longest_length;
        }
        self.total_length += other.total_length;
        self.total_longest_length += other.total_longest_length;
        self.total += other.total;
    }
}

/// Statistics for the drawable pipes of one tier.
pub fn stats_for_tier<'a, I>(pipes: I, tier: PipeTier) -> TierStats
where
    I: IntoIterator<Item = &'a PipeSegment>,
{
    let lengths: Vec<f64> = pipes
        .into_iter()
        .filter(|pipe| pipe.is_drawable() && classify(pipe) == tier)
        .map(|pipe| geometry::polyline_length(&pipe.coordinates))
        .collect();

    if lengths.is_empty() {
        return TierStats::default();
    }

    TierStats {
        count: lengths.len(),
        total_length: lengths.iter().sum::<f64>().round(),
        longest_length: lengths.iter().copied().fold(0.0, f64::max).round(),
    }
}

/// Whether a pipe belongs to a zone: attached by id, or any vertex inside.
pub fn pipe_in_zone(pipe: &PipeSegment, zone: &Zone) -> bool {
    let attached = pipe.zone_id.as_deref() == Some(zone.id.as_str());
    let touches = path_touches_polygon(&pipe.coordinates, &zone.coordinates);
    attached || touches
}

/// Pipes that belong to `zone`, judged by its own id and polygon.
pub fn zone_pipes<'a>(pipes: &'a [PipeSegment], zone: &Zone) -> Vec<&'a PipeSegment> {
    pipes.iter().filter(|pipe| pipe_in_zone(pipe, zone)).collect()
}

/// Pipes that belong to `zone_id`.
///
/// The first zone in `zones` with that id supplies the polygon. When the id
/// does not name a zone, only pipes attached to that id by reference are
/// returned.
pub fn pipes_in_zone<'a>(pipes: &'a [PipeSegment], zone_id: &str, zones: &[Zone]) -> Vec<&'a PipeSegment> {
    match find_zone(zones, zone_id) {
        Some(zone) => zone_pipes(pipes, zone),
        None => {
            log::warn!("Zone {} not found, matching pipes by zone id only", zone_id);
            pipes
                .iter()
                .filter(|pipe| pipe.zone_id.as_deref() == Some(zone_id))
                .collect()
        }
    }
}

/// Network statistics for the pipes of a zone already in hand.
pub fn zone_pipe_stats(pipes: &[PipeSegment], zone: &Zone) -> NetworkStats {
    tier_breakdown(&zone_pipes(pipes, zone))
}

/// Network statistics restricted to the pipes of one zone.
pub fn stats_for_zone(pipes: &[PipeSegment], zone_id: &str, zones: &[Zone]) -> NetworkStats {
    let members = pipes_in_zone(pipes, zone_id, zones);
    tier_breakdown(&members)
}

/// Whole-project network statistics, ignoring zones.
pub fn project_pipe_stats(pipes: &[PipeSegment]) -> NetworkStats {
    let all: Vec<&PipeSegment> = pipes.iter().collect();
    tier_breakdown(&all)
}

fn tier_breakdown(pipes: &[&PipeSegment]) -> NetworkStats {
    let [main, submain, lateral] =
        PipeTier::ALL.map(|tier| stats_for_tier(pipes.iter().copied(), tier));
    NetworkStats::from_tiers(main, submain, lateral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coordinate, EARTH_RADIUS_M};

    fn degrees_for(meters: f64) -> f64 {
        meters / (EARTH_RADIUS_M * std::f64::consts::PI / 180.0)
    }

    /// Pipe running north from the equator along longitude `lng`
    fn pipe(id: &str, tier: PipeTier, lng: f64, meters: f64) -> PipeSegment {
        PipeSegment::new(
            id,
            vec![Coordinate::new(0.0, lng), Coordinate::new(degrees_for(meters), lng)],
        )
        .with_tier(tier)
    }

    fn zone() -> Zone {
        let d = degrees_for(200.0);
        Zone::new(
            "z1",
            "Block",
            vec![
                Coordinate::new(-0.0001, -0.0001),
                Coordinate::new(-0.0001, d),
                Coordinate::new(d, d),
                Coordinate::new(d, -0.0001),
            ],
        )
    }

    fn sample_network() -> Vec<PipeSegment> {
        let lng = degrees_for(50.0);
        vec![
            pipe("m1", PipeTier::Main, lng, 100.0),
            pipe("m2", PipeTier::Main, lng, 50.0),
            pipe("s1", PipeTier::Submain, lng, 30.0),
            pipe("l1", PipeTier::Lateral, lng, 10.0),
            pipe("l2", PipeTier::Lateral, lng, 10.0),
            pipe("l3", PipeTier::Lateral, lng, 5.0),
        ]
    }

    #[test]
    fn test_stats_for_tier() {
        let pipes = sample_network();
        let main = stats_for_tier(&pipes, PipeTier::Main);
        assert_eq!(main.count, 2);
        assert_eq!(main.total_length, 150.0);
        assert_eq!(main.longest_length, 100.0);
    }

    #[test]
    fn test_stats_for_empty_tier() {
        let pipes = vec![pipe("m1", PipeTier::Main, 0.0, 100.0)];
        assert_eq!(stats_for_tier(&pipes, PipeTier::Submain), TierStats::default());
    }

    #[test]
    fn test_undrawable_pipes_skipped() {
        let mut short = pipe("m1", PipeTier::Main, 0.0, 100.0);
        short.coordinates.truncate(1);
        assert_eq!(stats_for_tier(&[short], PipeTier::Main).count, 0);
    }

    #[test]
    fn test_stats_for_zone_totals() {
        let pipes = sample_network();
        let stats = stats_for_zone(&pipes, "z1", &[zone()]);

        assert_eq!(stats.main, TierStats { count: 2, total_length: 150.0, longest_length: 100.0 });
        assert_eq!(stats.submain, TierStats { count: 1, total_length: 30.0, longest_length: 30.0 });
        assert_eq!(stats.lateral, TierStats { count: 3, total_length: 25.0, longest_length: 10.0 });
        assert_eq!(stats.total_longest_length, 140.0);
        assert_eq!(stats.total_length, 205.0);
        assert_eq!(stats.total, 6);
    }

    #[test]
    fn test_pipe_in_zone_by_id_or_geometry() {
        let z = zone();
        let far = degrees_for(5_000.0);

        let outside = pipe("o", PipeTier::Main, far, 10.0);
        assert!(!pipe_in_zone(&outside, &z));

        // Attached by id while drawn elsewhere
        let attached = outside.clone().with_zone("z1");
        assert!(pipe_in_zone(&attached, &z));

        // Attached to another zone but drawn inside this one
        let inside = pipe("i", PipeTier::Main, degrees_for(50.0), 10.0).with_zone("z2");
        assert!(pipe_in_zone(&inside, &z));
    }

    #[test]
    fn test_stats_for_unknown_zone_uses_ids() {
        let pipes = vec![
            pipe("a", PipeTier::Main, 0.0, 40.0).with_zone("ghost"),
            pipe("b", PipeTier::Main, 0.0, 40.0),
        ];
        let stats = stats_for_zone(&pipes, "ghost", &[zone()]);
        assert_eq!(stats.main.count, 1);
    }

    #[test]
    fn test_zone_pipe_stats_uses_own_polygon() {
        // Two zones share an id; lookup by id finds the first one
        let first = zone();
        let mut second = zone();
        let shift = degrees_for(1_000.0);
        for vertex in &mut second.coordinates {
            vertex.lng += shift;
        }

        let pipes = vec![pipe("l", PipeTier::Lateral, shift + degrees_for(50.0), 10.0)];
        assert_eq!(zone_pipe_stats(&pipes, &second).lateral.count, 1);
        assert_eq!(zone_pipe_stats(&pipes, &first).lateral.count, 0);
        assert_eq!(stats_for_zone(&pipes, "z1", &[first, second]).lateral.count, 0);
    }

    #[test]
    fn test_project_pipe_stats_ignores_zones() {
        let mut pipes = sample_network();
        pipes.push(pipe("far", PipeTier::Submain, degrees_for(9_000.0), 20.0));
        let stats = project_pipe_stats(&pipes);
        assert_eq!(stats.submain.count, 2);
        assert_eq!(stats.total, 7);
    }

    #[test]
    fn test_accumulate() {
        let pipes = sample_network();
        let one = project_pipe_stats(&pipes);
        let mut sum = NetworkStats::default();
        sum.accumulate(&one);
        sum.accumulate(&one);
        assert_eq!(sum.total, 12);
        assert_eq!(sum.main.total_length, 300.0);
        assert_eq!(sum.lateral.count, 6);
    }
}
