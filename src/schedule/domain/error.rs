//! Error types for schedule domain validation.

use thiserror::Error;

/// Errors returned while constructing schedule domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleDomainError {
    /// The request did not carry a file URL.
    #[error("Missing file URL")]
    MissingFileUrl,

    /// The uploaded payload was empty.
    #[error("Missing file")]
    MissingFile,
}
