//! Dialect layer tests
//!
//! - Parse → render → parse idempotence over the classic fixtures
//! - Formula fidelity through a full cycle
//! - Control-info and property scans

pub mod tests_roundtrip;
pub mod tests_scan;
