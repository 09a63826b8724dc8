//! Step definitions for parse endpoint BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
