//! Stroop Store — durable best-score record persistence.
//!
//! The record is a single non-negative integer: the best score ever
//! achieved. It lives in one text file as a decimal ASCII value with no
//! surrounding whitespace, read whole on load and fully overwritten on
//! save. Reads never fail outward; anything unreadable degrades to 0.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stroop_core::error::GameError;

/// Port for loading and saving the persisted best score.
///
/// Operations are synchronous, blocking calls; callers serialize access.
pub trait RecordStore: Send {
    /// Returns the persisted record, or 0 if none exists or it cannot be
    /// read. Read and parse failures degrade to 0 rather than propagating.
    fn load(&self) -> u32;

    /// Persists `value`, overwriting any prior record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if the write fails. Non-fatal to
    /// callers: the in-memory record stays usable for the process.
    fn save(&self, value: u32) -> Result<(), GameError>;
}

/// File-backed record store.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    /// Creates a store backed by the file at `path`. The file need not
    /// exist yet; a missing file loads as 0.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return 0,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "record file unreadable, defaulting to 0");
                return 0;
            }
        };

        // Strict encoding: decimal digits only, no surrounding whitespace.
        match contents.parse::<u32>() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "record file unparseable, defaulting to 0");
                0
            }
        }
    }

    fn save(&self, value: u32) -> Result<(), GameError> {
        fs::write(&self.path, value.to_string())
            .map_err(|err| GameError::Storage(format!("{}: {err}", self.path.display())))
    }
}

/// Shared handles delegate, so a host and a runner can watch one store.
impl<T> RecordStore for std::sync::Arc<T>
where
    T: RecordStore + Sync + ?Sized,
{
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&self, value: u32) -> Result<(), GameError> {
        (**self).save(value)
    }
}
