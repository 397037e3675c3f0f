//! # Error Types
//!
//! Two families of errors live here:
//!
//! - [`Violation`] - a broken load-set rule found by the validator. These are
//!   collected, never thrown, and their `Display` text is the exact message
//!   shown to the user.
//! - [`FormError`] - everything that can go wrong around the form itself:
//!   unparseable fields, row management mistakes, draft file I/O.
//!
//! ## Example
//!
//! ```rust
//! use loadset_core::errors::{FormError, FormResult};
//!
//! fn parse_span(text: &str) -> FormResult<f64> {
//!     text.trim()
//!         .parse::<f64>()
//!         .map_err(|_| FormError::invalid_number("beam_length", text))
//! }
//!
//! assert!(parse_span("abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for form and draft operations
pub type FormResult<T> = Result<T, FormError>;

/// A single broken rule in a beam + load set.
///
/// Indices are 1-based, matching the row numbers a user sees.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum Violation {
    /// Beam length, Young's modulus or moment of inertia is not positive
    #[error("All beam properties must be positive values.")]
    BeamProperty,

    /// The load list is empty
    #[error("At least one load must be specified.")]
    MissingLoads,

    /// A load's magnitude is not positive
    #[error("Load {index}: Magnitude must be positive.")]
    LoadMagnitude { index: usize },

    /// A load's position lies outside `[0, beam_length]`
    ///
    /// `beam_length` is rendered with `f64`'s `Display`: shortest round-trip
    /// digits, never exponent notation (`5`, `7.25`, `0.0000001`).
    #[error("Load {index}: Position must be between 0 and {beam_length}m.")]
    LoadPosition { index: usize, beam_length: f64 },

    /// A distributed load has a non-positive length
    #[error("Load {index}: Distributed load length must be positive.")]
    DistributedLength { index: usize },

    /// A distributed load runs past the end of the beam
    #[error("Load {index}: Distributed load extends beyond beam length.")]
    DistributedOverflow { index: usize },
}

impl Violation {
    /// Short code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Violation::BeamProperty => "BEAM_PROPERTY",
            Violation::MissingLoads => "MISSING_LOADS",
            Violation::LoadMagnitude { .. } => "LOAD_MAGNITUDE",
            Violation::LoadPosition { .. } => "LOAD_POSITION",
            Violation::DistributedLength { .. } => "DISTRIBUTED_LENGTH",
            Violation::DistributedOverflow { .. } => "DISTRIBUTED_OVERFLOW",
        }
    }

    /// 1-based load index this violation refers to, if any
    pub fn load_index(&self) -> Option<usize> {
        match self {
            Violation::BeamProperty | Violation::MissingLoads => None,
            Violation::LoadMagnitude { index }
            | Violation::LoadPosition { index, .. }
            | Violation::DistributedLength { index }
            | Violation::DistributedOverflow { index } => Some(*index),
        }
    }
}

/// Structured error type for form, row and draft operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FormError {
    /// A numeric field could not be parsed
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    /// A required field was left empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A choice field holds a value outside its option list
    #[error("Unknown option for '{field}': '{value}' (expected one of: {expected})")]
    UnknownOption {
        field: String,
        value: String,
        expected: String,
    },

    /// No load row with this id
    #[error("Load row not found: {id}")]
    RowNotFound { id: Uuid },

    /// The form must keep at least one load row
    #[error("Cannot remove the last load row")]
    LastRow,

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Draft is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Draft schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl FormError {
    /// Create an InvalidNumber error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        FormError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        FormError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        FormError::UnknownOption {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FormError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        FormError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Whether retrying later can succeed without user edits
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FormError::FileLocked { .. })
    }

    /// Short code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::InvalidNumber { .. } => "INVALID_NUMBER",
            FormError::MissingField { .. } => "MISSING_FIELD",
            FormError::UnknownOption { .. } => "UNKNOWN_OPTION",
            FormError::RowNotFound { .. } => "ROW_NOT_FOUND",
            FormError::LastRow => "LAST_ROW",
            FormError::FileError { .. } => "FILE_ERROR",
            FormError::FileLocked { .. } => "FILE_LOCKED",
            FormError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FormError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(e: serde_json::Error) -> Self {
        FormError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::BeamProperty.to_string(),
            "All beam properties must be positive values."
        );
        assert_eq!(
            Violation::MissingLoads.to_string(),
            "At least one load must be specified."
        );
        assert_eq!(
            Violation::LoadMagnitude { index: 3 }.to_string(),
            "Load 3: Magnitude must be positive."
        );
        assert_eq!(
            Violation::DistributedLength { index: 2 }.to_string(),
            "Load 2: Distributed load length must be positive."
        );
        assert_eq!(
            Violation::DistributedOverflow { index: 1 }.to_string(),
            "Load 1: Distributed load extends beyond beam length."
        );
    }

    #[test]
    fn test_position_message_formats_length_plainly() {
        let whole = Violation::LoadPosition { index: 1, beam_length: 5.0 };
        assert_eq!(whole.to_string(), "Load 1: Position must be between 0 and 5m.");

        let fractional = Violation::LoadPosition { index: 4, beam_length: 7.25 };
        assert_eq!(
            fractional.to_string(),
            "Load 4: Position must be between 0 and 7.25m."
        );

        let tiny = Violation::LoadPosition { index: 1, beam_length: 1e-7 };
        assert_eq!(
            tiny.to_string(),
            "Load 1: Position must be between 0 and 0.0000001m."
        );
    }

    #[test]
    fn test_violation_load_index() {
        assert_eq!(Violation::BeamProperty.load_index(), None);
        assert_eq!(Violation::DistributedOverflow { index: 5 }.load_index(), Some(5));
    }

    #[test]
    fn test_violation_serialization() {
        let v = Violation::LoadPosition { index: 2, beam_length: 6.0 };
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"type\":\"LoadPosition\""));
        let roundtrip: Violation = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FormError::missing_field("x").error_code(), "MISSING_FIELD");
        assert_eq!(FormError::LastRow.error_code(), "LAST_ROW");
        assert_eq!(Violation::MissingLoads.error_code(), "MISSING_LOADS");
    }

    #[test]
    fn test_unknown_option_lists_choices() {
        let err = FormError::unknown_option("support", "fixed", &["simply_supported", "cantilever"]);
        assert_eq!(
            err.to_string(),
            "Unknown option for 'support': 'fixed' (expected one of: simply_supported, cantilever)"
        );
    }

    #[test]
    fn test_only_lock_errors_are_recoverable() {
        assert!(FormError::file_locked("a.lsf", "me", "now").is_recoverable());
        assert!(!FormError::invalid_number("beam_length", "x").is_recoverable());
    }
}
