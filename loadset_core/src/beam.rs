//! Beam properties handed to the validator and, downstream, to the analysis.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// How the beam is held at its ends.
///
/// The validator does not look at this; it travels with the beam so the
/// downstream analysis knows which reactions to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportType {
    /// Pinned at x = 0, roller at x = L
    #[default]
    SimplySupported,
    /// Fixed at x = 0, free at x = L
    Cantilever,
}

impl SupportType {
    /// All support types in display order
    pub const ALL: [SupportType; 2] = [SupportType::SimplySupported, SupportType::Cantilever];

    /// Value used by form fields (`simply_supported`, `cantilever`)
    pub fn form_value(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "simply_supported",
            SupportType::Cantilever => "cantilever",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "Simply Supported",
            SupportType::Cantilever => "Cantilever",
        }
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SupportType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        SupportType::ALL
            .iter()
            .copied()
            .find(|st| st.form_value().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                let expected: Vec<&str> = SupportType::ALL.iter().map(|st| st.form_value()).collect();
                FormError::unknown_option("support_type", value, &expected)
            })
    }
}

/// Beam span and section/material constants in SI units.
///
/// # Example
/// ```
/// use loadset_core::beam::BeamSpec;
///
/// let beam = BeamSpec::new(5.0, 2e11, 1e-4);
/// assert!(beam.has_positive_properties());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span length (m)
    pub length: f64,

    /// Young's modulus E (Pa)
    pub young_modulus: f64,

    /// Second moment of area I (m^4)
    pub moment_of_inertia: f64,

    /// End conditions
    #[serde(default)]
    pub support: SupportType,
}

impl BeamSpec {
    /// Create a simply supported beam
    pub fn new(length: f64, young_modulus: f64, moment_of_inertia: f64) -> Self {
        BeamSpec {
            length,
            young_modulus,
            moment_of_inertia,
            support: SupportType::SimplySupported,
        }
    }

    /// True when length, E and I are all strictly positive
    pub fn has_positive_properties(&self) -> bool {
        self.length > 0.0 && self.young_modulus > 0.0 && self.moment_of_inertia > 0.0
    }
}
