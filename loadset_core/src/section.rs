//! Cross-section helpers for the moment of inertia field.
//!
//! Only the strong-axis second moment of area is computed.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Solid section shapes the form can compute I for (dimensions in m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Section {
    /// Solid rectangle, bending about the axis parallel to `width`
    Rectangular { width: f64, height: f64 },
    /// Solid round bar
    Circular { diameter: f64 },
}

impl Section {
    /// Second moment of area I (m^4)
    pub fn moment_of_inertia(&self) -> f64 {
        match *self {
            Section::Rectangular { width, height } => rectangular_moment_of_inertia(width, height),
            Section::Circular { diameter } => circular_moment_of_inertia(diameter),
        }
    }
}

/// I = b * h^3 / 12
pub fn rectangular_moment_of_inertia(width: f64, height: f64) -> f64 {
    width * height.powi(3) / 12.0
}

/// I = pi * d^4 / 64
pub fn circular_moment_of_inertia(diameter: f64) -> f64 {
    PI * diameter.powi(4) / 64.0
}
