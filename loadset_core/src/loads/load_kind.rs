//! Load kind definitions
//!
//! A load row is either a point force or a uniform line load over part of
//! the span. The kind drives which fields the form shows and which unit the
//! magnitude is entered in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Unit label for point load magnitudes
pub const POINT_UNIT: &str = "N";

/// Unit label for distributed load magnitudes
pub const DISTRIBUTED_UNIT: &str = "N/m";

/// Point or distributed load
///
/// # Example
/// ```
/// use loadset_core::loads::LoadKind;
///
/// assert_eq!(LoadKind::Distributed.magnitude_unit(), "N/m");
/// assert!(!LoadKind::Point.has_length());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadKind {
    /// Concentrated force at one position (N)
    #[default]
    Point,
    /// Uniform force per length from `position` to `position + length` (N/m)
    Distributed,
}

impl LoadKind {
    /// All load kinds in display order
    pub const ALL: [LoadKind; 2] = [LoadKind::Point, LoadKind::Distributed];

    /// Value used by form fields (`point`, `distributed`)
    pub fn form_value(&self) -> &'static str {
        match self {
            LoadKind::Point => "point",
            LoadKind::Distributed => "distributed",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Point => "Point Load",
            LoadKind::Distributed => "Distributed Load",
        }
    }

    /// Unit the magnitude is entered in
    pub fn magnitude_unit(&self) -> &'static str {
        match self {
            LoadKind::Point => POINT_UNIT,
            LoadKind::Distributed => DISTRIBUTED_UNIT,
        }
    }

    /// Whether this kind needs a loaded length
    pub fn has_length(&self) -> bool {
        matches!(self, LoadKind::Distributed)
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LoadKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        LoadKind::ALL
            .iter()
            .copied()
            .find(|k| k.form_value().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                let expected: Vec<&str> = LoadKind::ALL.iter().map(|k| k.form_value()).collect();
                FormError::unknown_option("load_type", value, &expected)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(LoadKind::Point.magnitude_unit(), "N");
        assert_eq!(LoadKind::Distributed.magnitude_unit(), "N/m");
    }

    #[test]
    fn test_length_visibility() {
        assert!(LoadKind::Distributed.has_length());
        assert!(!LoadKind::Point.has_length());
    }

    #[test]
    fn test_parse_form_value() {
        assert_eq!("point".parse::<LoadKind>().unwrap(), LoadKind::Point);
        assert_eq!("DISTRIBUTED".parse::<LoadKind>().unwrap(), LoadKind::Distributed);
        assert!("moment".parse::<LoadKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadKind::Distributed).unwrap();
        assert_eq!(json, "\"Distributed\"");
    }
}
