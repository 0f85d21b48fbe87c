//! Structured-document model for Driftwatch.
//!
//! Diff output is embedded in tracking tickets as a rich-text fragment.
//! This crate models the minimal slice of that document schema the diff
//! needs — four primitives (plain, deletion-styled, and insertion-styled
//! text runs, plus the hard line break) and four wrappers (paragraph, table
//! cell, table row, table) — and renders change groups into a two-column
//! removed/added table. The external ticket system's encoder turns the
//! serialized tree into its final wire form.
//!
//! # Modules
//!
//! - [`node`] — The [`AdfNode`] / [`Mark`] document tree, serde-shaped
//! - [`builder`] — Stateless constructors for the eight constructs
//! - [`render`] — [`render_diff`]: change groups → two-column table

pub mod builder;
pub mod node;
pub mod render;

pub use node::{AdfNode, Mark};
pub use render::render_diff;
