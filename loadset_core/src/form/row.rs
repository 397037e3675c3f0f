//! One editable load row
//!
//! Fields are kept as the raw text the user typed so a half-finished entry
//! survives round trips through the UI. Parsing happens only in
//! [`LoadRow::to_load_spec`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_number, parse_number};
use crate::errors::FormResult;
use crate::loads::{LoadKind, LoadSpec};
use crate::settings::RowDefaults;

/// A load row as shown in the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRow {
    /// Stable identifier for row management (survives reordering/removal of
    /// other rows)
    pub id: Uuid,

    pub kind: LoadKind,

    /// Magnitude text (N or N/m depending on `kind`)
    pub magnitude: String,

    /// Position text (m)
    pub position: String,

    /// Distributed length text (m); kept while hidden so toggling the kind
    /// back and forth does not lose it
    pub length: String,

    /// Upper bound offered for the position input (m)
    pub position_max: f64,
}

impl LoadRow {
    /// Create a point-load row filled with the given defaults
    pub fn new(defaults: &RowDefaults, position_max: f64) -> Self {
        LoadRow {
            id: Uuid::new_v4(),
            kind: LoadKind::Point,
            magnitude: format_number(defaults.magnitude),
            position: format_number(defaults.position),
            length: format_number(defaults.length),
            position_max,
        }
    }

    /// Whether the length field is visible
    pub fn shows_length(&self) -> bool {
        self.kind.has_length()
    }

    /// Unit label next to the magnitude field
    pub fn magnitude_unit(&self) -> &'static str {
        self.kind.magnitude_unit()
    }

    /// Parse this row into a [`LoadSpec`].
    ///
    /// `number` is the 1-based row number used in field names of parse
    /// errors (`load_2.position`). The length field is only read for
    /// distributed rows.
    pub fn to_load_spec(&self, number: usize) -> FormResult<LoadSpec> {
        let magnitude = parse_number(&format!("load_{}.magnitude", number), &self.magnitude)?;
        let position = parse_number(&format!("load_{}.position", number), &self.position)?;

        let length = if self.shows_length() {
            Some(parse_number(&format!("load_{}.length", number), &self.length)?)
        } else {
            None
        };

        Ok(LoadSpec {
            kind: self.kind,
            magnitude,
            position,
            length,
        })
    }

    /// Pull the position down to `bound` if it currently parses above it.
    ///
    /// Returns true when the position text was rewritten.
    pub(crate) fn clamp_position(&mut self, bound: f64) -> bool {
        self.position_max = bound;
        match self.position.trim().parse::<f64>() {
            Ok(position) if position > bound => {
                self.position = format_number(bound);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> LoadRow {
        LoadRow::new(&RowDefaults::default(), 5.0)
    }

    #[test]
    fn test_new_row_defaults() {
        let r = row();
        assert_eq!(r.kind, LoadKind::Point);
        assert_eq!(r.magnitude, "1000");
        assert_eq!(r.position, "2.5");
        assert_eq!(r.length, "1");
        assert!(!r.shows_length());
        assert_eq!(r.magnitude_unit(), "N");
    }

    #[test]
    fn test_rows_get_distinct_ids() {
        assert_ne!(row().id, row().id);
    }

    #[test]
    fn test_point_row_ignores_bad_length() {
        let mut r = row();
        r.length = "garbage".to_string();
        let spec = r.to_load_spec(1).unwrap();
        assert_eq!(spec, LoadSpec::point(1000.0, 2.5));
    }

    #[test]
    fn test_distributed_row_requires_length() {
        let mut r = row();
        r.kind = LoadKind::Distributed;
        r.length = "  ".to_string();
        let err = r.to_load_spec(4).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: load_4.length");
    }

    #[test]
    fn test_non_numeric_magnitude() {
        let mut r = row();
        r.magnitude = "12kN".to_string();
        let err = r.to_load_spec(2).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number for 'load_2.magnitude': '12kN'");
    }

    #[test]
    fn test_clamp_position() {
        let mut r = row();
        r.position = "7.5".to_string();
        assert!(r.clamp_position(6.0));
        assert_eq!(r.position, "6");
        assert_eq!(r.position_max, 6.0);

        assert!(!r.clamp_position(10.0));
        assert_eq!(r.position, "6");
        assert_eq!(r.position_max, 10.0);
    }

    #[test]
    fn test_clamp_leaves_unparseable_position_alone() {
        let mut r = row();
        r.position = "abc".to_string();
        assert!(!r.clamp_position(1.0));
        assert_eq!(r.position, "abc");
    }
}
