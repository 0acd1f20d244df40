//! Collaborator faults.
//!
//! Expected misses (no container, unsafe name, no artifact, wrong kind,
//! no declaration) are never errors; they come back as `Ok(None)`. The types
//! here only carry genuine failures of the index or the parser, which
//! navigation passes through to its caller untouched.

use thiserror::Error;

use crate::base::FileId;

/// Internal failure of an [`ArtifactIndex`](super::ArtifactIndex).
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index holds inconsistent data.
    #[error("artifact index is corrupted: {0}")]
    Corrupted(String),

    /// The index can't be queried right now.
    #[error("artifact index is unavailable: {0}")]
    Unavailable(String),
}

impl IndexError {
    /// An [`IndexError::Corrupted`] with `message`.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted(message.into())
    }

    /// An [`IndexError::Unavailable`] with `message`.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Internal failure of an [`ArtifactParser`](super::ArtifactParser).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The artifact's contents can't be decoded.
    #[error("malformed artifact {file}: {message}")]
    Malformed { file: FileId, message: String },

    /// IO error while reading the artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// A [`ParseError::Malformed`] for `file`.
    pub fn malformed(file: FileId, message: impl Into<String>) -> Self {
        Self::Malformed {
            file,
            message: message.into(),
        }
    }
}

/// A collaborator fault surfaced by navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
