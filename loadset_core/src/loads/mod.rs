//! Loads applied to the beam
//!
//! - [`LoadKind`] - point force or partial uniform line load
//! - [`LoadSpec`] - one parsed load row
//!
//! # Example
//!
//! ```
//! use loadset_core::loads::{LoadKind, LoadSpec};
//!
//! let loads = vec![
//!     LoadSpec::point(1000.0, 2.5),
//!     LoadSpec::distributed(500.0, 0.0, 2.0),
//! ];
//!
//! assert_eq!(loads[1].kind, LoadKind::Distributed);
//!
//! let total: f64 = loads.iter().map(|l| l.total_force()).sum();
//! assert_eq!(total, 2000.0);
//! ```

pub mod load_kind;
pub mod load_spec;

pub use load_kind::{LoadKind, DISTRIBUTED_UNIT, POINT_UNIT};
pub use load_spec::LoadSpec;
