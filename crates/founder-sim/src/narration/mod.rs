//! Narrative sources for simulation results.
//!
//! A [`DecisionNarrator`] turns a [`SimulationRequest`] into a [`SimulationResult`]. The
//! rule-based narrator wraps the deterministic engine and always succeeds; the hosted narrator
//! asks a language model. [`NarrationPipeline`] tries the hosted one first and keeps scores
//! authoritative by recomputing them with the engine whichever narrator answered.

pub mod hosted;
pub mod pipeline;
pub mod router;
pub mod rule_based;

use std::future::Future;

use serde::Serialize;

use crate::simulation::{SimulationRequest, SimulationResult};

pub use hosted::HostedNarrator;
pub use pipeline::{NarratedSimulation, NarrationPipeline};
pub use router::{simulation_router, NARRATION_SOURCE_HEADER};
pub use rule_based::RuleBasedNarrator;

/// Capability shared by every narrative source.
pub trait DecisionNarrator: Send + Sync {
    fn name(&self) -> &'static str;

    fn narrate(
        &self,
        request: &SimulationRequest,
    ) -> impl Future<Output = Result<SimulationResult, NarrationError>> + Send;
}

/// Which narrator produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationSource {
    Hosted,
    RuleBased,
}

impl NarrationSource {
    pub fn label(&self) -> &'static str {
        match self {
            NarrationSource::Hosted => "hosted",
            NarrationSource::RuleBased => "rule_based",
        }
    }
}

/// Reasons a narrator could not produce a result. All of them are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("narrator unavailable: {0}")]
    Unavailable(String),
    #[error("narrator request failed: {0}")]
    Transport(String),
    #[error("narrator timed out")]
    Timeout,
    #[error("narrator returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("narrator response had no text output")]
    MissingOutput,
    #[error("narrator output was not a valid simulation: {0}")]
    Parse(#[from] serde_json::Error),
}
