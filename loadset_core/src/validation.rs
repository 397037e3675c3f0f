//! # Load Set Validation
//!
//! Decides whether a beam and its ordered loads are well formed before they
//! are handed to the analysis. Every broken rule is reported; nothing stops
//! at the first problem.
//!
//! ## Rules
//!
//! 1. Beam length, Young's modulus and moment of inertia must all be positive
//!    (reported once, not per property).
//! 2. At least one load. With no loads there is nothing further to check.
//! 3. For load `i` (1-based):
//!    - magnitude > 0
//!    - 0 <= position <= beam length
//!    - distributed only: length > 0 and position + length <= beam length
//!
//! Bounds are inclusive: a load exactly at the beam end, or a distributed load
//! ending exactly there, is accepted.
//!
//! ## Example
//!
//! ```rust
//! use loadset_core::beam::BeamSpec;
//! use loadset_core::loads::LoadSpec;
//! use loadset_core::validation::validate;
//!
//! let beam = BeamSpec::new(5.0, 2e11, 1e-4);
//! let result = validate(&beam, &[LoadSpec::distributed(500.0, 4.0, 2.0)]);
//!
//! assert!(!result.ok);
//! assert_eq!(result.errors, vec!["Load 1: Distributed load extends beyond beam length."]);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::beam::BeamSpec;
use crate::errors::Violation;
use crate::loads::{LoadKind, LoadSpec};

/// Outcome of [`validate`].
///
/// `errors` holds the user-facing messages in the order they were found;
/// `violations` holds the same findings in structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no rule was broken
    pub ok: bool,

    /// Messages to display, in order
    pub errors: Vec<String>,

    /// Structured form of `errors`, index-aligned
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    fn from_violations(violations: Vec<Violation>) -> Self {
        ValidationResult {
            ok: violations.is_empty(),
            errors: violations.iter().map(|v| v.to_string()).collect(),
            violations,
        }
    }

    /// Violations attached to the load at 1-based `index`
    pub fn for_load(&self, index: usize) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.load_index() == Some(index))
    }
}

/// Check a beam and its loads against every rule.
///
/// Pure: the same inputs always give the same result, and nothing is mutated.
pub fn validate(beam: &BeamSpec, loads: &[LoadSpec]) -> ValidationResult {
    let mut violations = Vec::new();

    if !beam.has_positive_properties() {
        violations.push(Violation::BeamProperty);
    }

    if loads.is_empty() {
        violations.push(Violation::MissingLoads);
    } else {
        let beam_length = beam.length;
        for (i, load) in loads.iter().enumerate() {
            check_load(i + 1, load, beam_length, &mut violations);
        }
    }

    let result = ValidationResult::from_violations(violations);
    debug!(
        "validated {} load(s) on {} m beam: {} violation(s)",
        loads.len(),
        beam.length,
        result.violations.len()
    );
    result
}

fn check_load(index: usize, load: &LoadSpec, beam_length: f64, out: &mut Vec<Violation>) {
    if load.magnitude <= 0.0 {
        out.push(Violation::LoadMagnitude { index });
    }

    if load.position < 0.0 || load.position > beam_length {
        out.push(Violation::LoadPosition { index, beam_length });
    }

    if load.kind == LoadKind::Distributed {
        let length = load.effective_length();
        if length <= 0.0 {
            out.push(Violation::DistributedLength { index });
        }
        if load.end_position() > beam_length {
            out.push(Violation::DistributedOverflow { index });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam() -> BeamSpec {
        BeamSpec::new(5.0, 2e11, 1e-4)
    }

    #[test]
    fn test_all_valid() {
        let result = validate(&beam(), &[LoadSpec::point(1000.0, 2.5)]);
        assert!(result.ok);
        assert!(result.errors.is_empty());
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_negative_beam_length_reported_once() {
        let bad = BeamSpec::new(-1.0, 2e11, 1e-4);
        let result = validate(&bad, &[LoadSpec::point(1000.0, 0.0)]);
        let count = result
            .errors
            .iter()
            .filter(|e| *e == "All beam properties must be positive values.")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_all_beam_properties_bad_still_one_message() {
        let bad = BeamSpec::new(0.0, 0.0, -3.0);
        let result = validate(&bad, &[LoadSpec::point(1.0, 0.0)]);
        assert_eq!(result.violations[0], Violation::BeamProperty);
        assert_eq!(
            result.violations.iter().filter(|v| **v == Violation::BeamProperty).count(),
            1
        );
    }

    #[test]
    fn test_empty_loads() {
        let result = validate(&beam(), &[]);
        assert!(!result.ok);
        assert_eq!(result.errors, vec!["At least one load must be specified."]);
    }

    #[test]
    fn test_empty_loads_with_bad_beam() {
        let result = validate(&BeamSpec::new(5.0, 0.0, 1e-4), &[]);
        assert_eq!(
            result.errors,
            vec![
                "All beam properties must be positive values.",
                "At least one load must be specified.",
            ]
        );
    }

    #[test]
    fn test_magnitude_and_position_both_reported() {
        let result = validate(&beam(), &[LoadSpec::point(-10.0, 6.0)]);
        assert_eq!(
            result.errors,
            vec![
                "Load 1: Magnitude must be positive.",
                "Load 1: Position must be between 0 and 5m.",
            ]
        );
    }

    #[test]
    fn test_zero_magnitude_rejected() {
        let result = validate(&beam(), &[LoadSpec::point(0.0, 1.0)]);
        assert_eq!(result.errors, vec!["Load 1: Magnitude must be positive."]);
    }

    #[test]
    fn test_negative_position_rejected() {
        let result = validate(&beam(), &[LoadSpec::point(1.0, -0.1)]);
        assert_eq!(result.violations, vec![Violation::LoadPosition { index: 1, beam_length: 5.0 }]);
    }

    #[test]
    fn test_position_at_beam_end_is_valid() {
        assert!(validate(&beam(), &[LoadSpec::point(1.0, 5.0)]).ok);
        assert!(validate(&beam(), &[LoadSpec::point(1.0, 0.0)]).ok);
    }

    #[test]
    fn test_position_just_past_beam_end_is_invalid() {
        let result = validate(&beam(), &[LoadSpec::point(1.0, 5.0 + 1e-9)]);
        assert!(!result.ok);
        assert_eq!(result.violations[0].error_code(), "LOAD_POSITION");
    }

    #[test]
    fn test_distributed_ending_at_beam_end_is_valid() {
        assert!(validate(&beam(), &[LoadSpec::distributed(500.0, 3.0, 2.0)]).ok);
    }

    #[test]
    fn test_distributed_overflow() {
        let result = validate(&beam(), &[LoadSpec::distributed(500.0, 4.0, 2.0)]);
        assert!(result
            .errors
            .contains(&"Load 1: Distributed load extends beyond beam length.".to_string()));
    }

    #[test]
    fn test_distributed_just_past_beam_end() {
        let result = validate(&beam(), &[LoadSpec::distributed(500.0, 3.0, 2.0 + 1e-9)]);
        assert_eq!(result.violations, vec![Violation::DistributedOverflow { index: 1 }]);
    }

    #[test]
    fn test_mixed_validity_only_flags_second_load() {
        let loads = [
            LoadSpec::point(1000.0, 2.5),
            LoadSpec::distributed(500.0, 1.0, 0.0),
        ];
        let result = validate(&beam(), &loads);

        assert_eq!(result.for_load(1).count(), 0);
        let length_errors: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.starts_with("Load 2") && e.contains("length must be positive"))
            .collect();
        assert_eq!(length_errors.len(), 1);
        assert!(result.errors.iter().all(|e| !e.starts_with("Load 1")));
    }

    #[test]
    fn test_distributed_missing_length_counts_as_zero() {
        let mut load = LoadSpec::distributed(500.0, 1.0, 1.0);
        load.length = None;
        let result = validate(&beam(), &[load]);
        assert_eq!(result.violations, vec![Violation::DistributedLength { index: 1 }]);
    }

    #[test]
    fn test_point_length_is_ignored() {
        let mut load = LoadSpec::point(100.0, 4.5);
        load.length = Some(-2.0);
        assert!(validate(&beam(), &[load]).ok);
    }

    #[test]
    fn test_one_load_can_break_every_rule() {
        let load = LoadSpec::distributed(-1.0, 7.0, -1.0);
        let result = validate(&beam(), &[load]);
        let codes: Vec<_> = result.violations.iter().map(|v| v.error_code()).collect();
        assert_eq!(
            codes,
            vec!["LOAD_MAGNITUDE", "LOAD_POSITION", "DISTRIBUTED_LENGTH", "DISTRIBUTED_OVERFLOW"]
        );
    }

    #[test]
    fn test_numbering_follows_input_order() {
        let loads = [
            LoadSpec::point(1.0, 1.0),
            LoadSpec::point(1.0, 1.0),
            LoadSpec::point(0.0, 1.0),
        ];
        let result = validate(&beam(), &loads);
        assert_eq!(result.errors, vec!["Load 3: Magnitude must be positive."]);
    }

    #[test]
    fn test_position_bound_uses_beam_length_even_when_beam_invalid() {
        let bad = BeamSpec::new(-1.0, 2e11, 1e-4);
        let result = validate(&bad, &[LoadSpec::point(1.0, 0.5)]);
        assert_eq!(
            result.errors,
            vec![
                "All beam properties must be positive values.",
                "Load 1: Position must be between 0 and -1m.",
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let loads = [
            LoadSpec::point(-5.0, 9.0),
            LoadSpec::distributed(10.0, 4.0, 3.0),
        ];
        let first = validate(&beam(), &loads);
        let second = validate(&beam(), &loads);
        assert_eq!(first, second);
    }
}
