use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{JotterError, Result};
use crate::note::Note;

/// Whole-collection persistence against a single JSON file.
///
/// Every operation reads or replaces the entire collection; the file is the
/// only state that outlives a request. Callers that mutate must hold the
/// collection lock across their full load-modify-save sequence.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file holding an empty collection if it is absent.
    pub fn seed(&self) -> Result<()> {
        if !self.path.exists() {
            self.save(&[])?;
        }
        Ok(())
    }

    /// Load the full collection.
    ///
    /// A missing file is an empty collection. A file that exists but does
    /// not parse is reported as corrupt instead of being treated as empty.
    pub fn load(&self) -> Result<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(JotterError::Io(e)),
        };

        serde_json::from_str(&raw).map_err(|source| JotterError::CorruptDataFile {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Replace the persisted collection with `notes`.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
