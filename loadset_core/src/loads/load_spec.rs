//! Typed load entries
//!
//! A [`LoadSpec`] is what one form row becomes once its text fields have been
//! parsed. It carries no identity; its place in the list is its number.

use serde::{Deserialize, Serialize};

use super::load_kind::LoadKind;

/// A single load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSpec {
    /// Point or distributed
    pub kind: LoadKind,

    /// Load magnitude
    /// - For point loads: N
    /// - For distributed loads: N/m
    pub magnitude: f64,

    /// Distance from the left end of the beam (m); start of the loaded
    /// region for distributed loads
    pub position: f64,

    /// Loaded length (m). Only meaningful for distributed loads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl LoadSpec {
    /// Create a point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        LoadSpec {
            kind: LoadKind::Point,
            magnitude,
            position,
            length: None,
        }
    }

    /// Create a uniform load starting at `position` and running for `length`
    pub fn distributed(magnitude: f64, position: f64, length: f64) -> Self {
        LoadSpec {
            kind: LoadKind::Distributed,
            magnitude,
            position,
            length: Some(length),
        }
    }

    /// Loaded length used by the rules: the given length for distributed
    /// loads (0.0 if absent), always 0.0 for point loads
    pub fn effective_length(&self) -> f64 {
        match self.kind {
            LoadKind::Point => 0.0,
            LoadKind::Distributed => self.length.unwrap_or(0.0),
        }
    }

    /// Far end of the loaded region (m)
    pub fn end_position(&self) -> f64 {
        self.position + self.effective_length()
    }

    /// Resultant force (N)
    pub fn total_force(&self) -> f64 {
        match self.kind {
            LoadKind::Point => self.magnitude,
            LoadKind::Distributed => self.magnitude * self.effective_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ignores_length() {
        let mut load = LoadSpec::point(1000.0, 2.5);
        load.length = Some(3.0);
        assert_eq!(load.effective_length(), 0.0);
        assert_eq!(load.end_position(), 2.5);
        assert_eq!(load.total_force(), 1000.0);
    }

    #[test]
    fn test_distributed_extent() {
        let load = LoadSpec::distributed(500.0, 1.0, 2.0);
        assert_eq!(load.end_position(), 3.0);
        assert_eq!(load.total_force(), 1000.0);
    }

    #[test]
    fn test_point_serializes_without_length() {
        let json = serde_json::to_string(&LoadSpec::point(10.0, 1.0)).unwrap();
        assert!(!json.contains("length"));

        let parsed: LoadSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.length, None);
    }
}
