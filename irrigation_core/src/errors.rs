//! # Error Types
//!
//! Structured error types for irrigation_core.
//!
//! The geometry and estimator functions never fail: malformed geometry or
//! missing crop data degrade to zero-valued results. Errors only surface at
//! the snapshot boundary (parsing, validation, schema version), where the
//! caller handed over something the engine cannot work with at all.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::errors::{PlanError, PlanResult};
//!
//! fn validate_spacing(row_spacing_cm: f64) -> PlanResult<()> {
//!     if row_spacing_cm < 0.0 {
//!         return Err(PlanError::InvalidInput {
//!             field: "row_spacing_cm".to_string(),
//!             value: row_spacing_cm.to_string(),
//!             reason: "Spacing cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for irrigation_core operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Structured error type for snapshot-level operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PlanError {
    /// An input value is invalid (out of range, wrong shape, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An assignment references a crop that is not in the catalog
    #[error("Crop not found: {crop_value}")]
    CropNotFound { crop_value: String },

    /// Two records of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: String, id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: snapshot version {snapshot_version}, expected {expected_version}")]
    VersionMismatch {
        snapshot_version: String,
        expected_version: String,
    },
}

impl PlanError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        PlanError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CropNotFound error
    pub fn crop_not_found(crop_value: impl Into<String>) -> Self {
        PlanError::CropNotFound {
            crop_value: crop_value.into(),
        }
    }

    /// Create a DuplicateId error
    pub fn duplicate_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        PlanError::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PlanError::InvalidInput { .. } => "INVALID_INPUT",
            PlanError::MissingField { .. } => "MISSING_FIELD",
            PlanError::CropNotFound { .. } => "CROP_NOT_FOUND",
            PlanError::DuplicateId { .. } => "DUPLICATE_ID",
            PlanError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PlanError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::SerializationError {
            reason: err.to_string(),
        }
    }
}
