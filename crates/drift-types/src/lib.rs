//! Foundation types for Driftwatch.
//!
//! This crate provides the tracked-node hierarchy that every run walks, the
//! node lifecycle states, and the location addressing scheme that maps a node
//! to its stored captures. Every other Driftwatch crate depends on
//! `drift-types`.
//!
//! # Key Types
//!
//! - [`TrackedNode`] — One element of the monitored hierarchy (container or
//!   content leaf), validated at construction
//! - [`NodeState`] — Lifecycle state; `Done` subtrees are skipped by the walker
//! - [`Location`] — Separator-joined key path addressing a node's captures

pub mod error;
pub mod location;
pub mod node;
pub mod state;

pub use error::{TreeError, TreeResult};
pub use location::{Location, SEPARATOR};
pub use node::{NodeKind, TrackedNode};
pub use state::NodeState;
