//! # Form Settings
//!
//! Defaults used when a form is created or a row is added, plus the fallback
//! span used for position clamping while the beam length field is unusable.
//! Settings are stored with each draft and can be loaded from a standalone
//! JSON file.
//!
//! ## JSON Format
//!
//! Every field is optional; missing fields take their defaults.
//!
//! ```json
//! {
//!   "beam": { "length": 5.0, "young_modulus": 200000000000.0, "moment_of_inertia": 0.0001 },
//!   "row": { "magnitude": 1000.0, "position": 2.5, "length": 1.0 },
//!   "fallback_beam_length": 5.0,
//!   "default_material": "Steel"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::beam::SupportType;
use crate::errors::{FormError, FormResult};
use crate::materials::Material;

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Initial beam field values
    pub beam: BeamDefaults,

    /// Values for newly added load rows
    pub row: RowDefaults,

    /// Span used to bound positions when the beam length field is empty,
    /// non-numeric or zero (m)
    pub fallback_beam_length: f64,

    /// Material preset applied to Young's modulus when a form is created,
    /// overriding `beam.young_modulus`
    pub default_material: Option<Material>,
}

impl Default for FormSettings {
    fn default() -> Self {
        FormSettings {
            beam: BeamDefaults::default(),
            row: RowDefaults::default(),
            fallback_beam_length: 5.0,
            default_material: None,
        }
    }
}

impl FormSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> FormResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            FormError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;

        serde_json::from_str(&contents).map_err(|e| FormError::SerializationError {
            reason: format!("Invalid settings in {}: {}", path.display(), e),
        })
    }
}

/// Initial beam field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamDefaults {
    /// Span (m)
    pub length: f64,
    /// Young's modulus (Pa)
    pub young_modulus: f64,
    /// Moment of inertia (m^4)
    pub moment_of_inertia: f64,
    pub support: SupportType,
}

impl Default for BeamDefaults {
    fn default() -> Self {
        BeamDefaults {
            length: 5.0,
            young_modulus: 200e9,
            moment_of_inertia: 1e-4,
            support: SupportType::SimplySupported,
        }
    }
}

/// Values for newly added load rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowDefaults {
    /// Magnitude (N or N/m)
    pub magnitude: f64,
    /// Position (m)
    pub position: f64,
    /// Distributed length (m)
    pub length: f64,
}

impl Default for RowDefaults {
    fn default() -> Self {
        RowDefaults {
            magnitude: 1000.0,
            position: 2.5,
            length: 1.0,
        }
    }
}
