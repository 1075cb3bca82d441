//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("A bid by this user already exists for this job")]
    DuplicateBid,

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
}

impl StoreError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the error is the unique-index duplicate signal.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateBid)
    }
}

/// MongoDB server code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Map a driver error, translating unique-index violations into
/// [`StoreError::DuplicateBid`].
pub(crate) fn map_write_error(err: mongodb::error::Error) -> StoreError {
    use mongodb::error::{ErrorKind, WriteFailure};

    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == DUPLICATE_KEY_CODE {
            return StoreError::DuplicateBid;
        }
    }
    StoreError::Database(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_predicate() {
        assert!(StoreError::DuplicateBid.is_duplicate());
        assert!(!StoreError::invalid_id("abc").is_duplicate());
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            StoreError::invalid_id("zzz").to_string(),
            "Invalid document id: zzz"
        );
        assert_eq!(
            StoreError::DuplicateBid.to_string(),
            "A bid by this user already exists for this job"
        );
    }
}
