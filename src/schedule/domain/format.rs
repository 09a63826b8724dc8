//! Project file format detection.

use serde::{Deserialize, Serialize};
use std::fmt;

const OLE2_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Bytes inspected when looking for the root XML element.
const XML_SNIFF_WINDOW: usize = 4096;

/// Project file formats recognised by content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectFormat {
    /// Microsoft Project XML interchange (MSPDI).
    Mspdi,
    /// Delimited MPX text exchange format.
    Mpx,
    /// Binary Microsoft Project file stored in an OLE2 compound document.
    Mpp,
    /// Content that matches no known signature.
    Unknown,
}

impl ProjectFormat {
    /// Detects the format of a project file from its leading bytes.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(&OLE2_MAGIC) {
            return Self::Mpp;
        }

        let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
        if body.starts_with(b"MPX") {
            return Self::Mpx;
        }

        if root_element_is_project(body) {
            return Self::Mspdi;
        }

        Self::Unknown
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mspdi => "mspdi",
            Self::Mpx => "mpx",
            Self::Mpp => "mpp",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProjectFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Skips the XML prolog, comments and doctype, then checks whether the first
/// element is named `Project` (with or without a namespace prefix).
fn root_element_is_project(body: &[u8]) -> bool {
    let window = body.get(..XML_SNIFF_WINDOW).unwrap_or(body);
    let text = String::from_utf8_lossy(window);
    let mut rest = text.trim_start();
    if !rest.starts_with('<') {
        return false;
    }

    while let Some(after_open) = rest.strip_prefix('<') {
        if let Some(comment) = after_open.strip_prefix("!--") {
            let Some(close) = comment.find("-->") else {
                return false;
            };
            rest = comment.get(close + 3..).unwrap_or_default().trim_start();
            continue;
        }
        if after_open.starts_with('?') || after_open.starts_with('!') {
            let Some(close) = after_open.find('>') else {
                return false;
            };
            rest = after_open.get(close + 1..).unwrap_or_default().trim_start();
            continue;
        }

        let name: String = after_open
            .chars()
            .take_while(|ch| !ch.is_whitespace() && *ch != '>' && *ch != '/')
            .collect();
        let local_name = name.rsplit(':').next().unwrap_or_default();
        return local_name == "Project";
    }

    false
}
