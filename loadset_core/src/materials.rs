//! # Material Presets
//!
//! Typical Young's modulus values for quickly filling in the beam form.
//! These are nominal figures for preliminary work, not design values.
//!
//! ## Example
//!
//! ```rust
//! use loadset_core::materials::Material;
//!
//! let steel: Material = "steel".parse().unwrap();
//! assert_eq!(steel.young_modulus_pa(), 200e9);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Common structural materials with a preset modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Steel,
    Aluminum,
    Concrete,
    Wood,
    Copper,
}

impl Material {
    /// All materials in display order
    pub const ALL: [Material; 5] = [
        Material::Steel,
        Material::Aluminum,
        Material::Concrete,
        Material::Wood,
        Material::Copper,
    ];

    /// Young's modulus E (Pa)
    pub fn young_modulus_pa(&self) -> f64 {
        match self {
            Material::Steel => 200e9,
            Material::Aluminum => 70e9,
            Material::Concrete => 30e9,
            Material::Wood => 12e9,
            Material::Copper => 110e9,
        }
    }

    /// Value used by form fields and the CLI
    pub fn form_value(&self) -> &'static str {
        match self {
            Material::Steel => "steel",
            Material::Aluminum => "aluminum",
            Material::Concrete => "concrete",
            Material::Wood => "wood",
            Material::Copper => "copper",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Steel => "Steel",
            Material::Aluminum => "Aluminum",
            Material::Concrete => "Concrete",
            Material::Wood => "Wood",
            Material::Copper => "Copper",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Material {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Material::ALL
            .iter()
            .copied()
            .find(|m| m.form_value().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                let expected: Vec<&str> = Material::ALL.iter().map(|m| m.form_value()).collect();
                FormError::unknown_option("material", value, &expected)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(Material::Steel.young_modulus_pa(), 200e9);
        assert_eq!(Material::Aluminum.young_modulus_pa(), 70e9);
        assert_eq!(Material::Concrete.young_modulus_pa(), 30e9);
        assert_eq!(Material::Wood.young_modulus_pa(), 12e9);
        assert_eq!(Material::Copper.young_modulus_pa(), 110e9);
    }

    #[test]
    fn test_all_moduli_positive() {
        assert!(Material::ALL.iter().all(|m| m.young_modulus_pa() > 0.0));
    }

    #[test]
    fn test_unknown_material() {
        let err = "titanium".parse::<Material>().unwrap_err();
        assert!(err.to_string().contains("steel, aluminum, concrete, wood, copper"));
    }
}
