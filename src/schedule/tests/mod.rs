//! Unit tests for project schedule parsing.

mod service_tests;
