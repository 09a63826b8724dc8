//! MPP service: project file parsing over HTTP.
//!
//! This crate accepts a URL to a project-management file, downloads it,
//! decodes its tasks, and returns them as a JSON list of records carrying
//! `id`, `name`, `outlineLevel`, `start` and `finish`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Task records and request values with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for fetching and reading files
//! - **Adapters**: Concrete implementations of ports (HTTP, XML, MPX)
//!
//! # Modules
//!
//! - [`schedule`]: Fetching and decoding project files into task records
//! - [`http`]: Axum routes and plain-text error mapping
//! - [`config`]: Command-line and environment configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod schedule;
pub mod telemetry;
