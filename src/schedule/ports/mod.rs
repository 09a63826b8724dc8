//! Port contracts for project schedule parsing.
//!
//! Ports define infrastructure-agnostic interfaces used by schedule services.

pub mod fetcher;
pub mod reader;

pub use fetcher::{ProjectFileFetchError, ProjectFileFetchResult, ProjectFileFetcher};
pub use reader::{ProjectReadError, ProjectReadResult, ProjectReader};
