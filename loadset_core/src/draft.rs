//! # Form Drafts
//!
//! A [`FormDraft`] is a saved snapshot of a [`LoadForm`] with a small header.
//! Drafts serialize to `.lsf` files as human-readable JSON (see
//! [`file_io`](crate::file_io) for saving and loading).
//!
//! ## Structure
//!
//! ```text
//! FormDraft
//! ├── meta: DraftMetadata (schema version, label, author, timestamps)
//! └── form: LoadForm (settings, beam fields, load rows)
//! ```
//!
//! Only the form's field text is stored. Submission state is transient and
//! always starts idle after a load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::LoadForm;
use crate::settings::FormSettings;

/// Current schema version for .lsf files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Saved form snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDraft {
    pub meta: DraftMetadata,
    pub form: LoadForm,
}

impl FormDraft {
    /// Create a draft holding a fresh form built from `settings`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loadset_core::draft::FormDraft;
    /// use loadset_core::settings::FormSettings;
    ///
    /// let draft = FormDraft::new("Bridge deck B-2", "J. Doe", FormSettings::default());
    /// assert_eq!(draft.form.rows.len(), 1);
    /// ```
    pub fn new(label: impl Into<String>, author: impl Into<String>, settings: FormSettings) -> Self {
        let now = Utc::now();
        FormDraft {
            meta: DraftMetadata {
                version: SCHEMA_VERSION.to_string(),
                label: label.into(),
                author: author.into(),
                created: now,
                modified: now,
            },
            form: LoadForm::new(settings),
        }
    }

    /// Mutable access to the form. Marks the draft as modified.
    pub fn form_mut(&mut self) -> &mut LoadForm {
        self.touch();
        &mut self.form
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for FormDraft {
    fn default() -> Self {
        FormDraft::new("", "", FormSettings::default())
    }
}

/// Draft header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// User label for the beam being described
    pub label: String,

    /// Who prepared the input
    pub author: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}
