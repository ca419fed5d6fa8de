//! Agent construction: one capability seam, two variants.
//!
//! The [`Responder`] trait is the single call signature shared by the
//! model-backed and rule-based agents. The factory picks the most capable
//! variant that can be supported: model-backed when the caller supplies a
//! [`ModelRuntime`] handle, rule-based otherwise. No ambient globals; the
//! orchestration layer constructs one instance at startup and passes it
//! around by handle.

use tracing::warn;

use crate::core::route::route;
use crate::instruction::ResolvedInstruction;

/// Capability interface shared by agent variants.
pub trait Responder {
    fn respond(&self, input: &str) -> String;
}

/// External model-inference boundary.
///
/// Implementations live outside this crate (the agent runtime); tests use
/// scripted runtimes. The instruction is the resolved behavior text that
/// governs the model.
pub trait ModelRuntime {
    fn generate(&self, instruction: &str, input: &str) -> anyhow::Result<String>;
}

/// Rule-based agent answering through the query router. Always available.
pub struct RuleAgent {
    name: String,
    description: String,
    instruction: String,
}

impl RuleAgent {
    pub fn new(name: impl Into<String>, instruction: ResolvedInstruction) -> Self {
        Self {
            name: name.into(),
            description: "Converts CSV files to JSON format".to_string(),
            instruction: instruction.text,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The governing instruction text. The rule agent does not interpret
    /// it; it is carried for observability and for handoff to a model
    /// runtime if one becomes available later.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

impl Responder for RuleAgent {
    fn respond(&self, input: &str) -> String {
        route(input)
    }
}

/// Model-backed agent delegating to an external runtime.
pub struct ModelAgent {
    name: String,
    instruction: String,
    runtime: Box<dyn ModelRuntime>,
}

impl Responder for ModelAgent {
    fn respond(&self, input: &str) -> String {
        match self.runtime.generate(&self.instruction, input) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(agent = %self.name, error = %format!("{err:#}"), "model runtime failed");
                format!("The model backend is unavailable: {err:#}")
            }
        }
    }
}

/// Build the most capable responder available for this environment.
///
/// A supplied runtime handle selects the model-backed variant; `None`
/// selects the rule-based one. Both share the same external call signature,
/// so call sites never need to know which variant they hold.
pub fn build_responder(
    name: &str,
    instruction: ResolvedInstruction,
    runtime: Option<Box<dyn ModelRuntime>>,
) -> Box<dyn Responder> {
    match runtime {
        Some(runtime) => Box::new(ModelAgent {
            name: name.to_string(),
            instruction: instruction.text,
            runtime,
        }),
        None => Box::new(RuleAgent::new(name, instruction)),
    }
}
