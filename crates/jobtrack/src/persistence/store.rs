use super::{from_json_str, to_json_string, PersistenceError};
use crate::tracker::JobApplicationTracker;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads and writes one tracker file.
#[derive(Debug, Clone)]
pub struct TrackerStore {
    path: PathBuf,
}

impl TrackerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn read(&self) -> Result<JobApplicationTracker, PersistenceError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let tracker = from_json_str(&raw)?;
        info!(
            path = %self.path.display(),
            applications = tracker.len(),
            "loaded tracker"
        );
        Ok(tracker)
    }

    /// Writes the tracker, creating missing parent directories first.
    pub fn write(&self, tracker: &JobApplicationTracker) -> Result<(), PersistenceError> {
        let json = to_json_string(tracker)?;
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        info!(
            path = %self.path.display(),
            applications = tracker.len(),
            "saved tracker"
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
