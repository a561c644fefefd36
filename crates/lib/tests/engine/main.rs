//! Integration tests for the pantry engine through its public API.

mod common;
mod navigation_tests;
mod persistence_tests;
mod scenario_tests;
