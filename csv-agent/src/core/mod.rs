//! Deterministic, pure logic for tabular conversion and query routing.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod analyze;
pub mod convert;
pub mod parse;
pub mod route;
pub mod table;

/// Shared failure message for zero-row tables.
///
/// The analyzer and converter both report this for a header-only table; the
/// parser still accepts such input. The asymmetry is deliberate: downstream
/// reporting needs at least one row to describe column content.
pub const NO_DATA: &str = "no data found";
