//! Datastore error types.

use thiserror::Error;
use voto_types::ErrorCode;

/// Errors that can occur during datastore operations.
#[derive(Debug, Error)]
pub enum DatastoreError {
    /// No record with the given key exists in the collection.
    #[error("record not found in '{collection}': {key}")]
    NotFound { collection: String, key: String },

    /// A record with the same key already exists.
    #[error("record already exists in '{collection}': {key}")]
    Conflict { collection: String, key: String },

    /// The record or patch is not usable (e.g. not a JSON object).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing service failed or was unreachable.
    #[error("datastore backend error: {0}")]
    Backend(String),
}

impl DatastoreError {
    /// Creates a NotFound error.
    pub fn not_found(collection: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            key: key.into(),
        }
    }

    /// Creates a Conflict error.
    pub fn conflict(collection: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Conflict {
            collection: collection.into(),
            key: key.into(),
        }
    }

    /// Creates an InvalidRecord error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }

    /// Creates a Backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

impl ErrorCode for DatastoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "STORE_NOT_FOUND",
            Self::Conflict { .. } => "STORE_CONFLICT",
            Self::InvalidRecord(_) => "STORE_INVALID_RECORD",
            Self::Serialization(_) => "STORE_SERIALIZATION",
            Self::Backend(_) => "STORE_BACKEND",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A missing record may appear later; a backend failure may clear.
        matches!(self, Self::NotFound { .. } | Self::Backend(_))
    }
}
