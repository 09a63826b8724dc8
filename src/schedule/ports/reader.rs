//! Reader port for decoding project files into task records.

use crate::schedule::domain::{ProjectFile, ProjectFormat};
use thiserror::Error;

/// Result type for project reader operations.
pub type ProjectReadResult<T> = Result<T, ProjectReadError>;

/// Decoding contract for project files.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectReader: Send + Sync {
    /// Decodes `bytes` into a project file.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectReadError`] when the format is unsupported or the
    /// content cannot be decoded.
    fn read(&self, bytes: &[u8]) -> ProjectReadResult<ProjectFile>;
}

/// Errors returned by project reader implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectReadError {
    /// No reader handles the detected format.
    #[error("unsupported project file format: {0}")]
    UnsupportedFormat(ProjectFormat),

    /// The content is not valid text in the expected encoding.
    #[error("{format} file is not valid UTF-8 text")]
    Encoding {
        /// Format being decoded.
        format: ProjectFormat,
    },

    /// The content violates the format's structure.
    #[error("malformed {format} file: {detail}")]
    Malformed {
        /// Format being decoded.
        format: ProjectFormat,
        /// Description of the problem.
        detail: String,
    },
}

impl ProjectReadError {
    /// Creates a malformed-content error.
    pub fn malformed(format: ProjectFormat, detail: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            detail: detail.into(),
        }
    }
}
