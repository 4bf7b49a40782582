//! JSON persistence for trackers.
//!
//! Documents look like
//! `{"name": "...", "records": [{"submissionDate": "YYYY-MM-DD", "companyName": "...",
//! "roleName": "...", "status": "SUBMITTED"}]}`.

mod document;
mod store;

use crate::tracker::{JobApplicationTracker, TrackerError};

pub use document::{from_document, to_document, RecordDocument, TrackerDocument};
pub use store::TrackerStore;

const INDENT: &[u8] = b"    ";

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("malformed tracker document: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    #[error("invalid record at position {position}: {source}")]
    InvalidRecord {
        position: usize,
        #[source]
        source: TrackerError,
    },
    #[error("failed to access tracker file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    pub fn is_unknown_status(&self) -> bool {
        matches!(
            self,
            PersistenceError::InvalidRecord {
                source: TrackerError::UnknownStatus(_),
                ..
            }
        )
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            PersistenceError::InvalidRecord {
                source: TrackerError::InvalidDateFormat { .. },
                ..
            }
        )
    }
}

/// Pretty-printed JSON with a four-space indent.
pub fn to_json_string(tracker: &JobApplicationTracker) -> Result<String, PersistenceError> {
    let document = to_document(tracker);
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    serde::Serialize::serialize(&document, &mut serializer)
        .map_err(PersistenceError::MalformedDocument)?;
    String::from_utf8(buffer).map_err(|err| {
        PersistenceError::MalformedDocument(serde::ser::Error::custom(err.to_string()))
    })
}

pub fn from_json_str(raw: &str) -> Result<JobApplicationTracker, PersistenceError> {
    let document: TrackerDocument =
        serde_json::from_str(raw).map_err(PersistenceError::MalformedDocument)?;
    from_document(document)
}
