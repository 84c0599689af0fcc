//! # Project Snapshot
//!
//! The `ProjectSnapshot` is the complete input to the engine: the zones,
//! pipes, emitters and crop data of one project as the editor currently holds
//! them, plus the engine settings that shape the calculation.
//!
//! ## Structure
//!
//! ```text
//! ProjectSnapshot
//! ├── meta: ProjectMeta (schema version, name, last modified)
//! ├── settings: EngineSettings (density policy, labels, irrigation days)
//! ├── zones: Vec<Zone>
//! ├── pipes: Vec<PipeSegment>
//! ├── irrigation_points: Vec<IrrigationPoint>
//! ├── crops: Vec<Crop>
//! └── assignments: Vec<ZoneCropAssignment>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::project::ProjectSnapshot;
//!
//! let snapshot = ProjectSnapshot::from_json(r#"{ "zones": [] }"#).unwrap();
//! assert!(snapshot.pipes.is_empty());
//! assert_eq!(snapshot.settings.irrigation_days_per_month, 30.0);
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crops::{find_crop, Crop, ZoneCropAssignment};
use crate::emitters::IrrigationPoint;
use crate::errors::{PlanError, PlanResult};
use crate::pipes::PipeSegment;
use crate::planting::DensityPolicy;
use crate::water::{DAYS_PER_MONTH, DAYS_PER_YEAR};
use crate::zones::Zone;

/// Current schema version for snapshots
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Crop name reported for zones without a usable crop assignment
pub const UNASSIGNED_CROP_LABEL: &str = "Not defined";

/// Everything the engine needs to summarize one project.
///
/// Only `zones` is required on the wire; every other collection defaults to
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub meta: ProjectMeta,

    #[serde(default)]
    pub settings: EngineSettings,

    pub zones: Vec<Zone>,

    #[serde(default)]
    pub pipes: Vec<PipeSegment>,

    #[serde(default)]
    pub irrigation_points: Vec<IrrigationPoint>,

    #[serde(default)]
    pub crops: Vec<Crop>,

    #[serde(default)]
    pub assignments: Vec<ZoneCropAssignment>,
}

impl ProjectSnapshot {
    /// Parse a snapshot and check its schema version.
    ///
    /// # Errors
    ///
    /// * `SerializationError` - malformed JSON or a missing `zones` array
    /// * `VersionMismatch` - the snapshot was written by a newer major schema
    pub fn from_json(json: &str) -> PlanResult<Self> {
        let snapshot: ProjectSnapshot = serde_json::from_str(json)?;
        snapshot.meta.check_version()?;
        Ok(snapshot)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check cross-record consistency.
    ///
    /// The engine tolerates all of these conditions (it simply reports zeros),
    /// so validation is for callers that want to surface them to a user.
    pub fn validate(&self) -> PlanResult<()> {
        let mut zone_ids = HashSet::new();
        for zone in &self.zones {
            if zone.id.is_empty() {
                return Err(PlanError::missing_field("zones[].id"));
            }
            if !zone_ids.insert(zone.id.as_str()) {
                return Err(PlanError::duplicate_id("zone", &zone.id));
            }
        }

        let mut pipe_ids = HashSet::new();
        for pipe in &self.pipes {
            if !pipe_ids.insert(pipe.id.as_str()) {
                return Err(PlanError::duplicate_id("pipe", &pipe.id));
            }
        }

        for assignment in &self.assignments {
            if !zone_ids.contains(assignment.zone_id.as_str()) {
                return Err(PlanError::invalid_input(
                    "assignments[].zone_id",
                    &assignment.zone_id,
                    "Assignment references an unknown zone",
                ));
            }
            if find_crop(&self.crops, &assignment.crop_value).is_none() {
                return Err(PlanError::crop_not_found(&assignment.crop_value));
            }
        }

        self.settings.validate()
    }

    /// Whether the project has any pipes at all.
    pub fn has_pipes(&self) -> bool {
        !self.pipes.is_empty()
    }
}

/// Snapshot header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Schema version (for migration compatibility)
    #[serde(default = "default_version")]
    pub version: String,

    /// Project name
    #[serde(default)]
    pub name: String,

    /// When the editor last changed the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

impl Default for ProjectMeta {
    fn default() -> Self {
        ProjectMeta {
            version: default_version(),
            name: String::new(),
            modified: None,
        }
    }
}

impl ProjectMeta {
    /// Snapshots from the same major schema version are accepted.
    pub fn check_version(&self) -> PlanResult<()> {
        let major = |v: &str| v.split('.').next().unwrap_or("").to_string();
        if major(&self.version) != major(SCHEMA_VERSION) {
            return Err(PlanError::VersionMismatch {
                snapshot_version: self.version.clone(),
                expected_version: SCHEMA_VERSION.to_string(),
            });
        }
        Ok(())
    }
}

/// Engine settings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "density_policy": "auto",
///   "unassigned_crop_label": "Not defined",
///   "irrigation_days_per_month": 30,
///   "irrigation_days_per_year": 365
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// How planting points are estimated
    pub density_policy: DensityPolicy,

    /// Crop name reported for unassigned zones
    pub unassigned_crop_label: String,

    /// Irrigation days used for monthly water figures
    pub irrigation_days_per_month: f64,

    /// Irrigation days used for yearly water figures
    pub irrigation_days_per_year: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            density_policy: DensityPolicy::Auto,
            unassigned_crop_label: UNASSIGNED_CROP_LABEL.to_string(),
            irrigation_days_per_month: DAYS_PER_MONTH,
            irrigation_days_per_year: DAYS_PER_YEAR,
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> PlanResult<()> {
        for (field, days) in [
            ("irrigation_days_per_month", self.irrigation_days_per_month),
            ("irrigation_days_per_year", self.irrigation_days_per_year),
        ] {
            if !days.is_finite() || days < 0.0 {
                return Err(PlanError::invalid_input(field, days.to_string(), "Days must be a non-negative number"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;

    fn snapshot() -> ProjectSnapshot {
        ProjectSnapshot {
            zones: vec![Zone::new(
                "z1",
                "Block A",
                vec![
                    Coordinate::new(0.0, 0.0),
                    Coordinate::new(0.0, 0.001),
                    Coordinate::new(0.001, 0.001),
                ],
            )],
            crops: vec![Crop {
                value: "durian".to_string(),
                ..Default::default()
            }],
            assignments: vec![ZoneCropAssignment::new("z1", "durian")],
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_json() {
        let snapshot = ProjectSnapshot::from_json(r#"{"zones": []}"#).unwrap();
        assert_eq!(snapshot.meta.version, SCHEMA_VERSION);
        assert_eq!(snapshot.settings, EngineSettings::default());
        assert!(!snapshot.has_pipes());
    }

    #[test]
    fn test_missing_zones_is_an_error() {
        let err = ProjectSnapshot::from_json(r#"{"pipes": []}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_version_mismatch() {
        let err = ProjectSnapshot::from_json(r#"{"meta": {"version": "2.0.0"}, "zones": []}"#).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
        assert!(ProjectSnapshot::from_json(r#"{"meta": {"version": "0.4.1"}, "zones": []}"#).is_ok());
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let json = r#"{"settings": {"density_policy": "area"}, "zones": []}"#;
        let snapshot = ProjectSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.settings.density_policy, DensityPolicy::Area);
        assert_eq!(snapshot.settings.irrigation_days_per_year, 365.0);
        assert_eq!(snapshot.settings.unassigned_crop_label, UNASSIGNED_CROP_LABEL);
    }

    #[test]
    fn test_validate_ok() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_zone() {
        let mut s = snapshot();
        s.zones.push(s.zones[0].clone());
        assert_eq!(s.validate().unwrap_err().error_code(), "DUPLICATE_ID");
    }

    #[test]
    fn test_validate_unknown_crop() {
        let mut s = snapshot();
        s.assignments[0].crop_value = "rubber".to_string();
        assert_eq!(s.validate().unwrap_err(), PlanError::crop_not_found("rubber"));
    }

    #[test]
    fn test_validate_assignment_for_unknown_zone() {
        let mut s = snapshot();
        s.assignments[0].zone_id = "z404".to_string();
        assert_eq!(s.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validate_settings() {
        let mut s = snapshot();
        s.settings.irrigation_days_per_month = -1.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let s = snapshot();
        let json = s.to_json().unwrap();
        let roundtrip = ProjectSnapshot::from_json(&json).unwrap();
        assert_eq!(s, roundtrip);
    }
}
