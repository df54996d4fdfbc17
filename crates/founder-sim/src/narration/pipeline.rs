use serde::Serialize;
use tracing::{info, warn};

use super::{DecisionNarrator, NarrationSource, RuleBasedNarrator};
use crate::simulation::{health_score, risk_level, SimulationRequest, SimulationResult};

/// A simulation result tagged with the narrator that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarratedSimulation {
    pub result: SimulationResult,
    pub source: NarrationSource,
}

/// Tries the primary narrator, falls back to the rule engine, and re-scores either way.
pub struct NarrationPipeline<N> {
    primary: Option<N>,
    fallback: RuleBasedNarrator,
}

impl<N> NarrationPipeline<N>
where
    N: DecisionNarrator,
{
    pub fn new(primary: Option<N>) -> Self {
        Self {
            primary,
            fallback: RuleBasedNarrator,
        }
    }

    pub fn rule_based_only() -> Self {
        Self::new(None)
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn run(&self, request: &SimulationRequest) -> NarratedSimulation {
        if let Some(primary) = &self.primary {
            match primary.narrate(request).await {
                Ok(result) => return authoritative(result, request, NarrationSource::Hosted),
                Err(err) => {
                    warn!(
                        narrator = primary.name(),
                        error = %err,
                        "narrator failed; falling back to rule engine"
                    );
                }
            }
        }

        let result = self.fallback.project(request);
        authoritative(result, request, NarrationSource::RuleBased)
    }
}

/// Overwrites the health score and risk level with the engine's reading of `updatedMetrics`.
fn authoritative(
    mut result: SimulationResult,
    request: &SimulationRequest,
    source: NarrationSource,
) -> NarratedSimulation {
    result.health_score = health_score(&result.updated_metrics, &request.market);
    result.risk_level = risk_level(&result.updated_metrics, &request.market);

    info!(
        source = source.label(),
        decision = request.decision.kind.key(),
        health_score = result.health_score,
        risk_level = result.risk_level.label(),
        "decision narrated"
    );

    NarratedSimulation { result, source }
}
