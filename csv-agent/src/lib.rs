//! CSV to JSON conversion agent core.
//!
//! Turns delimited text into structured JSON while preserving column
//! identity and order, and resolves the agent's governing instruction text
//! through an ordered chain of increasingly degraded sources, guaranteeing
//! a usable instruction even when every remote source is down. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, analysis, conversion,
//!   query routing). No I/O, fully testable in isolation.
//! - **[`instruction`]**: The resolver chain. Individual sources may touch
//!   the environment, filesystem, or network; the chain logic itself is
//!   deterministic and never fails.
//! - **[`io`]**: Side-effecting configuration handling.
//!
//! [`tools`] is the boundary surface handed to the external orchestration
//! layer: every outcome crosses it as data, never as a fault.

pub mod agent;
pub mod core;
pub mod exit_codes;
pub mod instruction;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod tools;
