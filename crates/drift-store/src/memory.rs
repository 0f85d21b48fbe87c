use std::collections::HashMap;
use std::sync::RwLock;

use drift_types::Location;

use crate::error::StoreResult;
use crate::traits::{ContentSource, DocumentSink};

/// In-memory, HashMap-based capture store.
///
/// Intended for tests and embedding. Prior captures, current captures, and
/// written documents are held in separate maps behind `RwLock`s for safe
/// concurrent access. Text is cloned on read.
#[derive(Default)]
pub struct InMemoryStore {
    prior: RwLock<HashMap<Location, String>>,
    current: RwLock<HashMap<Location, String>>,
    documents: RwLock<HashMap<Location, String>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the prior capture for a location.
    pub fn insert_prior(&self, location: Location, text: impl Into<String>) {
        self.prior
            .write()
            .expect("lock poisoned")
            .insert(location, text.into());
    }

    /// Seed the current capture for a location.
    pub fn insert_current(&self, location: Location, text: impl Into<String>) {
        self.current
            .write()
            .expect("lock poisoned")
            .insert(location, text.into());
    }

    /// The document last written for a location, if any.
    pub fn document(&self, location: &Location) -> Option<String> {
        self.documents
            .read()
            .expect("lock poisoned")
            .get(location)
            .cloned()
    }

    /// Number of documents written so far.
    pub fn document_count(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }
}

impl ContentSource for InMemoryStore {
    fn prior_text(&self, location: &Location) -> StoreResult<Option<String>> {
        let map = self.prior.read().expect("lock poisoned");
        Ok(map.get(location).cloned())
    }

    fn current_text(&self, location: &Location) -> StoreResult<Option<String>> {
        let map = self.current.read().expect("lock poisoned");
        Ok(map.get(location).cloned())
    }
}

impl DocumentSink for InMemoryStore {
    fn write_document(&self, location: &Location, document: &str) -> StoreResult<()> {
        let mut map = self.documents.write().expect("lock poisoned");
        map.insert(location.clone(), document.to_string());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("prior", &self.prior.read().expect("lock poisoned").len())
            .field("current", &self.current.read().expect("lock poisoned").len())
            .field("documents", &self.document_count())
            .finish()
    }
}
