//! Submission outcome and the in-progress indicator state.

use serde::{Deserialize, Serialize};

use crate::beam::BeamSpec;
use crate::loads::LoadSpec;

/// Result of [`LoadForm::submit`](super::LoadForm::submit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Submission {
    /// Parsing or validation failed; every message must be shown and the
    /// calculation must not run
    Blocked { errors: Vec<String> },

    /// Input is well formed and ready for the analysis
    Accepted { beam: BeamSpec, loads: Vec<LoadSpec> },

    /// A previous submission is still being calculated
    AlreadyInProgress,
}

impl Submission {
    /// True for [`Submission::Accepted`]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    /// Messages to display (empty unless blocked)
    pub fn errors(&self) -> &[String] {
        match self {
            Submission::Blocked { errors } => errors,
            _ => &[],
        }
    }
}

/// Whether the form is idle or waiting on a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmitState {
    #[default]
    Idle,
    InProgress,
}

impl SubmitState {
    /// Submit button caption
    pub fn submit_label(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Calculate",
            SubmitState::InProgress => "Calculating...",
        }
    }

    /// Inputs and the submit button are disabled while in progress
    pub fn inputs_enabled(&self) -> bool {
        matches!(self, SubmitState::Idle)
    }
}
