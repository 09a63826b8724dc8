//! Adapter implementations for project file fetch and read ports.

pub mod memory;

mod http;
mod mpx;
mod mspdi;
mod universal;

pub use http::{HttpFetcherSettings, HttpProjectFileFetcher};
pub use mpx::MpxReader;
pub use mspdi::MspdiReader;
pub use universal::UniversalProjectReader;
