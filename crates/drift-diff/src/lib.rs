//! Diff engine for Driftwatch.
//!
//! Computes line-granularity edit scripts between two text captures and
//! coalesces them into bounded change groups that carry only the context
//! immediately adjacent to an edit.
//!
//! # Key Types
//!
//! - [`DiffOp`] — One Equal/Insert/Delete operation; a `Vec<DiffOp>` is an
//!   edit script
//! - [`compute_edit_script`] — Line-level Myers diff, adjacent same-kind ops
//!   merged
//! - [`ChangeGroup`] / [`group_changes`] — Context-bounded grouping of the
//!   script for rendering

pub mod engine;
pub mod group;

pub use engine::{compute_edit_script, reconstruct_source, reconstruct_target, DiffOp};
pub use group::{group_changes, ChangeGroup};
