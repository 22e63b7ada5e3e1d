//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Hand-checked positions with exact move lists
//! - `edge_cases.rs` - Empty boards, missing kings, crowded boards
//! - `proptest.rs` - Property-based tests

mod edge_cases;
