//! Error types for batch formatting.
//!
//! The formatting core itself is total: any string input yields a string
//! output and never fails. Errors only arise at the batch boundary, where a
//! record source may reject an edit session, a field write, or a commit.

/// Result type alias for batch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for batch formatting over a record source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening an edit session failed
    #[error("Failed to open edit session: {message}")]
    EditSession {
        /// Error message from the record source
        message: String,
    },

    /// Writing a formatted value into a record failed
    #[error("Failed to write record {index}: {message}")]
    FieldWrite {
        /// Index of the record that rejected the write
        index: usize,
        /// Error message from the record source
        message: String,
    },

    /// Committing the edit session failed
    #[error("Failed to commit changes: {message}")]
    CommitFailed {
        /// Error message from the record source
        message: String,
    },
}

impl Error {
    /// Create a new edit-session error
    pub fn edit_session(message: impl Into<String>) -> Self {
        Self::EditSession {
            message: message.into(),
        }
    }

    /// Create a new field-write error
    pub fn field_write(index: usize, message: impl Into<String>) -> Self {
        Self::FieldWrite {
            index,
            message: message.into(),
        }
    }

    /// Create a new commit error
    pub fn commit_failed(message: impl Into<String>) -> Self {
        Self::CommitFailed {
            message: message.into(),
        }
    }
}
