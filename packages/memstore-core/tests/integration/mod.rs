//! Integration test suite.
//!
//! 1. End-to-end workload equivalence across layouts
//! 2. CSV ingestion into every layout
//! 3. Config-driven smoke tests

pub mod csv_loading_tests;
pub mod end_to_end_tests;
pub mod system_smoke_tests;
