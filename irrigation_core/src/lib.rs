//! # irrigation_core - Irrigation Layout Statistics Engine
//!
//! `irrigation_core` turns an irrigation layout (zone polygons, pipe
//! polylines, emitter points and crop parameters) into per-zone and
//! project-wide figures: areas, planting points, water demand, yield and
//! income estimates, pipe quantities and emitter counts.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an explicit [`ProjectSnapshot`]
//! - **JSON-First**: All records implement Serialize/Deserialize
//! - **Zero, not panic**: Degenerate geometry and missing crop data produce
//!   zero-valued metrics; only snapshot parsing and validation return errors
//!
//! ## Quick Start
//!
//! ```rust
//! use irrigation_core::{summarize_project, ProjectSnapshot};
//!
//! let json = r#"{
//!     "zones": [{
//!         "id": "z1",
//!         "name": "Block A",
//!         "coordinates": [
//!             { "lat": 13.7000, "lng": 100.5000 },
//!             { "lat": 13.7000, "lng": 100.5010 },
//!             { "lat": 13.7010, "lng": 100.5010 },
//!             { "lat": 13.7010, "lng": 100.5000 }
//!         ]
//!     }]
//! }"#;
//!
//! let snapshot = ProjectSnapshot::from_json(json).unwrap();
//! let summary = summarize_project(&snapshot);
//! assert_eq!(summary.zones.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Distance, area and containment on lat/lng coordinates
//! - [`pipes`] - Pipe records and tier classification
//! - [`network`] - Pipe statistics per tier, per zone and per project
//! - [`crops`] - Crop parameters, assignments and spacing
//! - [`planting`] - Planting point estimation
//! - [`water`] - Water demand
//! - [`yields`] - Yield and income estimates
//! - [`emitters`] - Emitter type normalization and zone tallies
//! - [`zones`] - Zone records
//! - [`summary`] - Zone summaries and project totals
//! - [`project`] - Snapshot container and engine settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod crops;
pub mod emitters;
pub mod errors;
pub mod geometry;
pub mod network;
pub mod pipes;
pub mod planting;
pub mod project;
pub mod summary;
pub mod units;
pub mod water;
pub mod yields;
pub mod zones;

// Re-export commonly used types at crate root for convenience
pub use errors::{PlanError, PlanResult};
pub use geometry::Coordinate;
pub use project::{EngineSettings, ProjectMeta, ProjectSnapshot};
pub use summary::{summarize_project, ProjectSummary, ProjectTotals, ZoneSummary};
