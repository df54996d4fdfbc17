use super::{DecisionNarrator, NarrationError};
use crate::simulation::{simulate, SimulationRequest, SimulationResult};

/// Narrator backed by the deterministic engine. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedNarrator;

impl RuleBasedNarrator {
    pub fn project(&self, request: &SimulationRequest) -> SimulationResult {
        simulate(&request.company, &request.market, &request.decision)
    }
}

impl DecisionNarrator for RuleBasedNarrator {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    async fn narrate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, NarrationError> {
        Ok(self.project(request))
    }
}
