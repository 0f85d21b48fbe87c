//! Difference detection for Driftwatch.
//!
//! Ties the pipeline together: the [`DiffRecorder`] reads the prior and
//! current captures for one location, runs them through the diff engine,
//! grouper, and formatter, and persists the rendered document; the walker
//! ([`detect_differences`]) drives the recorder across a tracked-node
//! hierarchy, skipping `Done` subtrees and aggregating a per-node
//! [`DiffReport`].
//!
//! # Modules
//!
//! - [`recorder`] — [`DiffRecorder`] and the pure [`diff_document`] helper
//! - [`walker`] — Depth-first traversal and the [`DiffReport`]
//! - [`error`] — Error types for detection runs

pub mod error;
pub mod recorder;
pub mod walker;

pub use error::{DetectError, DetectResult};
pub use recorder::{diff_document, DiffRecorder};
pub use walker::{detect_differences, DiffReport};
