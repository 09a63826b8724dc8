//! Domain model for project schedule parsing.
//!
//! The schedule domain models the task records extracted from a project file
//! and the request-level URL value, keeping transport and decoding concerns
//! outside of the domain boundary.

mod error;
mod file_url;
mod format;
mod task;

pub use error::ScheduleDomainError;
pub use file_url::FileUrl;
pub use format::ProjectFormat;
pub use task::{ProjectFile, ScheduleTask};
