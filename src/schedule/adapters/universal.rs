//! Format-sniffing reader that delegates to the concrete format readers.

use super::{MpxReader, MspdiReader};
use crate::schedule::{
    domain::{ProjectFile, ProjectFormat},
    ports::{ProjectReadError, ProjectReadResult, ProjectReader},
};
use tracing::debug;

/// Reads any supported project file by inspecting its content.
///
/// Binary MPP files are recognised but not decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalProjectReader {
    mspdi: MspdiReader,
    mpx: MpxReader,
}

impl UniversalProjectReader {
    /// Creates a reader covering every supported format.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mspdi: MspdiReader::new(),
            mpx: MpxReader::new(),
        }
    }
}

impl ProjectReader for UniversalProjectReader {
    fn read(&self, bytes: &[u8]) -> ProjectReadResult<ProjectFile> {
        let format = ProjectFormat::detect(bytes);
        debug!(%format, bytes = bytes.len(), "detected project file format");
        match format {
            ProjectFormat::Mspdi => self.mspdi.read(bytes),
            ProjectFormat::Mpx => self.mpx.read(bytes),
            ProjectFormat::Mpp | ProjectFormat::Unknown => {
                Err(ProjectReadError::UnsupportedFormat(format))
            }
        }
    }
}
