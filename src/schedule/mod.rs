//! Project schedule parsing for the MPP service.
//!
//! This module turns a project-management file, referenced by URL or
//! uploaded directly, into an ordered list of task records. Format decoding
//! is limited to the five task fields the service reports. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
