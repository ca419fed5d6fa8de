//! Instruction resolution: an ordered source chain with a built-in fallback.
//!
//! The resolver tries each configured source in order and stops at the
//! first one that yields a non-empty instruction. Source failures are
//! logged and swallowed; the only caller-visible "failure" is that the
//! built-in default was used, which is a successful outcome.

pub mod fallback;
pub mod resolver;
pub mod sources;

pub use fallback::fallback_instruction;
pub use resolver::{InstructionResolver, InstructionSource, Origin, ResolvedInstruction};
