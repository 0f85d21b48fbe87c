//! Storage collaborators for Driftwatch.
//!
//! The comparison core never touches storage directly; it reads captured
//! text through a [`ContentSource`] and writes rendered diff documents
//! through a [`DocumentSink`]. Absent content is a normal condition
//! (`Ok(None)`), never an error; real I/O failures always propagate.
//!
//! # Modules
//!
//! - [`traits`] — The [`ContentSource`] and [`DocumentSink`] contracts
//! - [`memory`] — In-memory [`InMemoryStore`] for tests and embedding
//! - [`fs`] — Filesystem-backed [`FsStore`] over capture directories
//! - [`error`] — Error types for store operations

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsStore;
pub use memory::InMemoryStore;
pub use traits::{ContentSource, DocumentSink};
