use super::decisions::apply_decision;
use super::domain::{
    CompanyMetrics, FounderDecision, MarketConditions, RiskLevel, SimulationResult,
};
use super::risk::risk_level;
use super::scoring::health_score;

const SHORT_TERM_WITH_RISKS: &str =
    "Short term, the company will feel the operational and cash impact of this decision.";
const SHORT_TERM_SMOOTH: &str =
    "Short term, this decision should be relatively smooth to absorb operationally.";
const LONG_TERM_WITH_OPPORTUNITIES: &str =
    "Long term, this could reshape the company trajectory if execution risk is managed.";
const LONG_TERM_LIMITED: &str =
    "Long term impact appears limited unless combined with additional strategic moves.";

/// Projects the next quarter for `decision` using the rule-based engine.
///
/// Works on a copy of `metrics`; neither input is modified.
pub fn simulate(
    metrics: &CompanyMetrics,
    market: &MarketConditions,
    decision: &FounderDecision,
) -> SimulationResult {
    let (updated_metrics, effects) = apply_decision(metrics, market, decision);

    let health_score = health_score(&updated_metrics, market);
    let risk_level = risk_level(&updated_metrics, market);
    let success_probability = success_probability(health_score, risk_level);

    let short_term_impact = if effects.risks.is_empty() {
        SHORT_TERM_SMOOTH
    } else {
        SHORT_TERM_WITH_RISKS
    };
    let long_term_impact = if effects.opportunities.is_empty() {
        LONG_TERM_LIMITED
    } else {
        LONG_TERM_WITH_OPPORTUNITIES
    };

    SimulationResult {
        updated_metrics,
        risks: effects.risks,
        opportunities: effects.opportunities,
        short_term_impact: short_term_impact.to_string(),
        long_term_impact: long_term_impact.to_string(),
        success_probability,
        risk_level,
        health_score,
    }
}

/// Health score shifted by the risk bucket: High costs 20 points, Low earns 5.
pub fn success_probability(health_score: u8, risk_level: RiskLevel) -> u8 {
    let adjustment = match risk_level {
        RiskLevel::High => -20,
        RiskLevel::Medium => 0,
        RiskLevel::Low => 5,
    };
    (i16::from(health_score) + adjustment).clamp(0, 100) as u8
}
