//! # loadset_core - Beam Load Input Validation
//!
//! `loadset_core` prepares and checks the input for a beam analysis: a span
//! with its material/section constants and an ordered list of point and
//! distributed loads. The analysis itself happens elsewhere; this crate makes
//! sure nothing malformed reaches it.
//!
//! ## Design Philosophy
//!
//! - **Pure validation**: [`validate`] is a function of its arguments only
//! - **Collect, don't stop**: every broken rule is reported, in order
//! - **Parse at the edge**: the [`form`] model keeps raw text and turns it
//!   into typed values in one explicit step
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use loadset_core::beam::BeamSpec;
//! use loadset_core::loads::LoadSpec;
//! use loadset_core::validate;
//!
//! let beam = BeamSpec::new(5.0, 2e11, 1e-4);
//! let loads = vec![LoadSpec::point(1000.0, 2.5)];
//!
//! let result = validate(&beam, &loads);
//! assert!(result.ok);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam span and properties
//! - [`loads`] - Point/distributed load types
//! - [`validation`] - The load set rules
//! - [`form`] - Headless form model (rows, clamping, submission)
//! - [`materials`] - Young's modulus presets
//! - [`section`] - Moment of inertia helpers
//! - [`settings`] - Form defaults
//! - [`draft`] - Saved form snapshots
//! - [`file_io`] - Draft files with atomic saves and locking
//! - [`errors`] - Structured error types

pub mod beam;
pub mod draft;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod loads;
pub mod materials;
pub mod section;
pub mod settings;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use beam::{BeamSpec, SupportType};
pub use draft::FormDraft;
pub use errors::{FormError, FormResult, Violation};
pub use file_io::{load_draft, save_draft, FileLock};
pub use form::{LoadForm, LoadRow, Submission};
pub use loads::{LoadKind, LoadSpec};
pub use settings::FormSettings;
pub use validation::{validate, ValidationResult};
