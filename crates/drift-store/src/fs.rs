//! Filesystem-backed capture store.
//!
//! Layout: three root directories, one per capture stage. Each tracked
//! location maps to a subdirectory named by its separator-joined key path,
//! holding one fixed-name file per stage:
//!
//! ```text
//! <archive_root>/PAGES/home/content.txt   last run's capture
//! <capture_root>/PAGES/home/content.txt   current capture
//! <diff_root>/PAGES/home/diff.json        rendered diff document
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use drift_types::Location;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ContentSource, DocumentSink};

/// File name for captured text under a location directory.
pub const CONTENT_FILE: &str = "content.txt";

/// File name for the rendered diff document under a location directory.
pub const DIFF_FILE: &str = "diff.json";

/// Capture store over three on-disk directory trees.
#[derive(Clone, Debug)]
pub struct FsStore {
    archive_root: PathBuf,
    capture_root: PathBuf,
    diff_root: PathBuf,
}

impl FsStore {
    /// Create a store over the given roots. The directories need not exist
    /// yet; reads from a missing tree are `Ok(None)` and writes create it.
    pub fn new(
        archive_root: impl Into<PathBuf>,
        capture_root: impl Into<PathBuf>,
        diff_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            archive_root: archive_root.into(),
            capture_root: capture_root.into(),
            diff_root: diff_root.into(),
        }
    }

    /// Path of the prior-capture file for a location.
    pub fn archive_path(&self, location: &Location) -> PathBuf {
        self.archive_root.join(location.as_str()).join(CONTENT_FILE)
    }

    /// Path of the current-capture file for a location.
    pub fn capture_path(&self, location: &Location) -> PathBuf {
        self.capture_root.join(location.as_str()).join(CONTENT_FILE)
    }

    /// Path of the diff-document file for a location.
    pub fn diff_path(&self, location: &Location) -> PathBuf {
        self.diff_root.join(location.as_str()).join(DIFF_FILE)
    }
}

fn read_text(path: &Path, location: &Location) -> StoreResult<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::Io(e)),
    };
    let text = String::from_utf8(bytes).map_err(|_| StoreError::NotText {
        location: location.to_string(),
    })?;
    Ok(Some(text))
}

impl ContentSource for FsStore {
    fn prior_text(&self, location: &Location) -> StoreResult<Option<String>> {
        read_text(&self.archive_path(location), location)
    }

    fn current_text(&self, location: &Location) -> StoreResult<Option<String>> {
        read_text(&self.capture_path(location), location)
    }
}

impl DocumentSink for FsStore {
    fn write_document(&self, location: &Location, document: &str) -> StoreResult<()> {
        let path = self.diff_path(location);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, document)?;
        debug!(location = %location, bytes = document.len(), "diff document written");
        Ok(())
    }
}
