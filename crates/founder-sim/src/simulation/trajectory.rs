use super::domain::{
    CompanyMetrics, DecisionKind, FounderDecision, MarketConditions, SimulationResult,
};
use super::engine::simulate;

/// One simulated quarter in a multi-quarter projection.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterOutcome {
    /// 1-based.
    pub quarter: u32,
    pub decision: DecisionKind,
    pub result: SimulationResult,
}

/// Chains decisions quarter by quarter, feeding each projection into the next.
pub fn project_quarters(
    metrics: &CompanyMetrics,
    market: &MarketConditions,
    decisions: &[FounderDecision],
) -> Vec<QuarterOutcome> {
    let mut outcomes = Vec::with_capacity(decisions.len());
    let mut current = metrics.clone();

    for (index, decision) in decisions.iter().enumerate() {
        let result = simulate(&current, market, decision);
        current = result.updated_metrics.clone();
        outcomes.push(QuarterOutcome {
            quarter: index as u32 + 1,
            decision: decision.kind,
            result,
        });
    }

    outcomes
}
