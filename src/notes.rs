//! Justification note persistence.
//!
//! A single-key store: one fixed-named UTF-8 text file, overwritten on
//! every save, no history. Saving is an explicit user action with no
//! interaction with the estimation path; a failed save is non-fatal and
//! can simply be retried.

use crate::error::NoteError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default note file name.
pub const DEFAULT_NOTE_FILENAME: &str = "justification.txt";

/// File-backed store for the free-text justification note.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Store under `dir` with the default file name.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DEFAULT_NOTE_FILENAME),
        }
    }

    /// Store at an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the note. Idempotent; the previous note is replaced.
    pub fn save(&self, text: &str) -> Result<(), NoteError> {
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Read the note back, or `None` if nothing was saved yet.
    pub fn load(&self) -> Result<Option<String>, NoteError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// True when a note has been saved.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
