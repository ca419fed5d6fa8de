//! Ordered first-match resolution over unreliable instruction sources.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::instruction::fallback::fallback_instruction;

/// One named strategy for obtaining instruction text.
///
/// `Ok(Some(text))` with non-empty text resolves the chain immediately.
/// `Ok(None)` and `Err(_)` both mean "no signal": errors are logged and
/// swallowed, never surfaced to the resolver's caller. Attempts must be
/// independent and idempotent; implementations that talk to the network
/// are responsible for their own timeouts.
pub trait InstructionSource {
    fn name(&self) -> &str;
    fn attempt(&self, target: &str) -> Result<Option<String>>;
}

/// Where a resolved instruction came from.
///
/// Observability only: fallback text is exactly as usable as source text,
/// and callers must not treat the two differently outside of logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Resolved by the named source.
    Source(String),
    /// Every source was exhausted; the built-in default was used.
    Fallback,
}

/// Instruction text plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstruction {
    pub text: String,
    pub origin: Origin,
}

/// Tries sources in configured order, stopping at the first success.
///
/// Holds no network state; safe to invoke repeatedly, and callers may
/// re-resolve at any time to pick up upstream changes.
pub struct InstructionResolver {
    sources: Vec<Box<dyn InstructionSource>>,
}

impl InstructionResolver {
    /// The source list is fixed at construction and never mutated.
    pub fn new(sources: Vec<Box<dyn InstructionSource>>) -> Self {
        Self { sources }
    }

    /// Resolve instruction text for `target`.
    ///
    /// At-most-one-success, ordered-first-match: later sources are never
    /// consulted once an earlier one succeeds, and no attempt is retried
    /// within a single call. Never fails: when every source is exhausted
    /// the built-in default for `target` is returned.
    pub fn resolve(&self, target: &str) -> ResolvedInstruction {
        for source in &self.sources {
            match source.attempt(target) {
                Ok(Some(text)) if !text.trim().is_empty() => {
                    info!(source = source.name(), agent = target, "instruction resolved");
                    return ResolvedInstruction {
                        text,
                        origin: Origin::Source(source.name().to_string()),
                    };
                }
                Ok(_) => {
                    debug!(source = source.name(), agent = target, "source had no instruction");
                }
                Err(err) => {
                    warn!(
                        source = source.name(),
                        agent = target,
                        error = %format!("{err:#}"),
                        "source attempt failed, trying next"
                    );
                }
            }
        }

        info!(agent = target, "all sources exhausted, using fallback instruction");
        ResolvedInstruction {
            text: fallback_instruction(target).to_string(),
            origin: Origin::Fallback,
        }
    }
}
