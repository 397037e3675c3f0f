//! # Load Form
//!
//! Headless model of the beam load input form. It owns every piece of
//! mutable UI state (raw field text, the list of load rows, the submit
//! indicator) so any front end can render it as plain data.
//!
//! Typed values are produced only at the boundary: [`LoadForm::extract`]
//! parses every required field, and [`LoadForm::submit`] runs the
//! [validator](crate::validation::validate) on the result.
//!
//! ## Example
//!
//! ```rust
//! use loadset_core::form::{LoadForm, Submission};
//! use loadset_core::loads::LoadKind;
//! use loadset_core::settings::FormSettings;
//!
//! let mut form = LoadForm::new(FormSettings::default());
//! let id = form.add_row();
//! form.set_kind(id, LoadKind::Distributed).unwrap();
//! form.set_position(id, "4").unwrap();
//! form.set_length(id, "2").unwrap();
//!
//! match form.submit() {
//!     Submission::Blocked { errors } => {
//!         assert_eq!(errors, vec!["Load 2: Distributed load extends beyond beam length."]);
//!     }
//!     other => panic!("expected blocked submission, got {:?}", other),
//! }
//! ```

pub mod row;
pub mod submit;

pub use row::LoadRow;
pub use submit::{SubmitState, Submission};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beam::{BeamSpec, SupportType};
use crate::errors::{FormError, FormResult};
use crate::loads::{LoadKind, LoadSpec};
use crate::materials::Material;
use crate::section::Section;
use crate::settings::FormSettings;
use crate::validation::validate;

/// Form state: raw beam fields plus load rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadForm {
    /// Defaults and clamping fallback
    pub settings: FormSettings,

    /// Span text (m)
    pub beam_length: String,

    /// Young's modulus text (Pa)
    pub young_modulus: String,

    /// Moment of inertia text (m^4)
    pub moment_of_inertia: String,

    pub support: SupportType,

    /// Load rows in display order
    pub rows: Vec<LoadRow>,

    #[serde(skip)]
    submit_state: SubmitState,

    /// Set after the first submit attempt; front ends use it to start
    /// highlighting invalid fields
    #[serde(skip)]
    was_validated: bool,

    #[serde(skip)]
    displayed_errors: Vec<String>,
}

impl LoadForm {
    /// Create a form with beam values from `settings` and one default row.
    pub fn new(settings: FormSettings) -> Self {
        let mut form = LoadForm {
            beam_length: format_number(settings.beam.length),
            young_modulus: format_number(settings.beam.young_modulus),
            moment_of_inertia: format_number(settings.beam.moment_of_inertia),
            support: settings.beam.support,
            rows: Vec::new(),
            settings,
            submit_state: SubmitState::Idle,
            was_validated: false,
            displayed_errors: Vec::new(),
        };
        if let Some(material) = form.settings.default_material {
            form.apply_material(material);
        }
        let first = LoadRow::new(&form.settings.row, form.position_bound());
        form.rows.push(first);
        form
    }

    // ------------------------------------------------------------------
    // Row management
    // ------------------------------------------------------------------

    /// Append a row with default values and refresh position bounds.
    ///
    /// Returns the new row's id.
    pub fn add_row(&mut self) -> Uuid {
        let row = LoadRow::new(&self.settings.row, self.position_bound());
        let id = row.id;
        self.rows.push(row);
        self.refresh_position_bounds();
        info!("added load row {} ({} total)", id, self.rows.len());
        id
    }

    /// Remove a row. The last remaining row cannot be removed.
    pub fn remove_row(&mut self, id: Uuid) -> FormResult<LoadRow> {
        let index = self.row_index(id)?;
        if !self.can_remove_rows() {
            return Err(FormError::LastRow);
        }
        let removed = self.rows.remove(index);
        info!("removed load row {} ({} left)", id, self.rows.len());
        Ok(removed)
    }

    /// Whether remove buttons are offered (more than one row)
    pub fn can_remove_rows(&self) -> bool {
        self.rows.len() > 1
    }

    /// Look up a row by id
    pub fn row(&self, id: Uuid) -> Option<&LoadRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Id of the row at 1-based `number`
    pub fn row_id(&self, number: usize) -> Option<Uuid> {
        number
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|r| r.id)
    }

    fn row_index(&self, id: Uuid) -> FormResult<usize> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(FormError::RowNotFound { id })
    }

    fn row_mut(&mut self, id: Uuid) -> FormResult<&mut LoadRow> {
        let index = self.row_index(id)?;
        Ok(&mut self.rows[index])
    }

    // ------------------------------------------------------------------
    // Row fields
    // ------------------------------------------------------------------

    /// Change a row's kind (toggles length visibility and magnitude unit)
    pub fn set_kind(&mut self, id: Uuid, kind: LoadKind) -> FormResult<()> {
        let row = self.row_mut(id)?;
        row.kind = kind;
        debug!(
            "row {} is now {} (unit {}, length {})",
            id,
            kind,
            row.magnitude_unit(),
            if row.shows_length() { "shown" } else { "hidden" }
        );
        Ok(())
    }

    pub fn set_magnitude(&mut self, id: Uuid, text: impl Into<String>) -> FormResult<()> {
        self.row_mut(id)?.magnitude = text.into();
        Ok(())
    }

    pub fn set_position(&mut self, id: Uuid, text: impl Into<String>) -> FormResult<()> {
        self.row_mut(id)?.position = text.into();
        Ok(())
    }

    pub fn set_length(&mut self, id: Uuid, text: impl Into<String>) -> FormResult<()> {
        self.row_mut(id)?.length = text.into();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Beam fields
    // ------------------------------------------------------------------

    /// Set the span text and pull row positions back inside the new bound.
    pub fn set_beam_length(&mut self, text: impl Into<String>) {
        self.beam_length = text.into();
        self.refresh_position_bounds();
    }

    pub fn set_young_modulus(&mut self, text: impl Into<String>) {
        self.young_modulus = text.into();
    }

    pub fn set_moment_of_inertia(&mut self, text: impl Into<String>) {
        self.moment_of_inertia = text.into();
    }

    pub fn set_support(&mut self, support: SupportType) {
        self.support = support;
    }

    /// Fill Young's modulus from a material preset
    pub fn apply_material(&mut self, material: Material) {
        self.young_modulus = format_number(material.young_modulus_pa());
        debug!("applied {} preset: E = {} Pa", material, self.young_modulus);
    }

    /// Fill the moment of inertia from a section shape
    pub fn apply_section(&mut self, section: Section) {
        self.moment_of_inertia = format_number(section.moment_of_inertia());
        debug!("applied {:?}: I = {} m^4", section, self.moment_of_inertia);
    }

    /// Span used to bound position inputs.
    ///
    /// Falls back to `settings.fallback_beam_length` when the span text does
    /// not parse, is not finite or is zero.
    pub fn position_bound(&self) -> f64 {
        match self.beam_length.trim().parse::<f64>() {
            Ok(length) if length.is_finite() && length != 0.0 => length,
            _ => self.settings.fallback_beam_length,
        }
    }

    /// Set every row's position maximum to the current bound and rewrite
    /// positions above it. Advisory only: [`validate`] checks the bound again.
    pub fn refresh_position_bounds(&mut self) {
        let bound = self.position_bound();
        for row in &mut self.rows {
            if row.clamp_position(bound) {
                debug!("clamped row {} position to {} m", row.id, bound);
            }
        }
    }

    // ------------------------------------------------------------------
    // Extraction and submission
    // ------------------------------------------------------------------

    /// Parse the form into typed values.
    ///
    /// Fails on the first field that is empty or not a finite number.
    pub fn extract(&self) -> FormResult<(BeamSpec, Vec<LoadSpec>)> {
        let beam = BeamSpec {
            length: parse_number("beam_length", &self.beam_length)?,
            young_modulus: parse_number("young_modulus", &self.young_modulus)?,
            moment_of_inertia: parse_number("moment_of_inertia", &self.moment_of_inertia)?,
            support: self.support,
        };

        let loads = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.to_load_spec(i + 1))
            .collect::<FormResult<Vec<_>>>()?;

        Ok((beam, loads))
    }

    /// Parse, validate and either block or accept the submission.
    ///
    /// On acceptance the form switches to [`SubmitState::InProgress`] until
    /// [`LoadForm::reset_submit_state`] is called.
    pub fn submit(&mut self) -> Submission {
        if self.submit_state == SubmitState::InProgress {
            warn!("submit ignored: calculation already in progress");
            return Submission::AlreadyInProgress;
        }
        self.was_validated = true;

        let submission = match self.extract() {
            Err(e) => {
                warn!("form rejected before validation: {}", e);
                Submission::Blocked {
                    errors: vec![e.to_string()],
                }
            }
            Ok((beam, loads)) => {
                let result = validate(&beam, &loads);
                if result.ok {
                    Submission::Accepted { beam, loads }
                } else {
                    Submission::Blocked {
                        errors: result.errors,
                    }
                }
            }
        };

        match &submission {
            Submission::Blocked { errors } => {
                info!("submission blocked with {} error(s)", errors.len());
                self.displayed_errors = errors.clone();
            }
            Submission::Accepted { loads, .. } => {
                info!("submission accepted with {} load(s)", loads.len());
                self.displayed_errors.clear();
                self.submit_state = SubmitState::InProgress;
            }
            Submission::AlreadyInProgress => {}
        }

        submission
    }

    /// Return to the idle state (calculation finished or failed)
    pub fn reset_submit_state(&mut self) {
        self.submit_state = SubmitState::Idle;
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    /// Messages from the last blocked submission, in order
    pub fn displayed_errors(&self) -> &[String] {
        &self.displayed_errors
    }
}

impl Default for LoadForm {
    fn default() -> Self {
        LoadForm::new(FormSettings::default())
    }
}

/// Parse a required numeric field.
pub(crate) fn parse_number(field: &str, text: &str) -> FormResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormError::missing_field(field));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::invalid_number(field, text)),
    }
}

/// Render a number the way it is written back into a field
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}
