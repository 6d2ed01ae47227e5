//! Errors shared across repository ports.

/// Error raised by a persistence adapter.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),

    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}

impl RepositoryError {
    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Creates a corrupt-record error (a stored value failed to decode).
    pub fn corrupt_record(message: impl Into<String>) -> Self {
        Self::CorruptRecord(message.into())
    }
}
