//! Request-level file URL value object.

use super::ScheduleDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URL of a project file supplied in a parse request.
///
/// Only emptiness is checked here. Scheme and syntax problems surface when
/// the fetcher tries to open the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileUrl(String);

impl FileUrl {
    /// Creates a file URL from raw request text.
    ///
    /// Surrounding whitespace is discarded, so a whitespace-only body counts
    /// as missing rather than as an unreachable URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::MissingFileUrl`] when the value is
    /// empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ScheduleDomainError> {
        let normalized = value.as_ref().trim();
        if normalized.is_empty() {
            return Err(ScheduleDomainError::MissingFileUrl);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FileUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
