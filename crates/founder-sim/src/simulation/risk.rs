use super::domain::{CompanyMetrics, MarketConditions, RiskLevel};
use super::scoring::cash_stability;

const HIGH_RISK_STABILITY: f64 = 25.0;
const MEDIUM_RISK_STABILITY: f64 = 55.0;
const CROWDED_MARKET: f64 = 7.0;

/// Buckets the company into a risk level. High is evaluated first and wins outright.
pub fn risk_level(metrics: &CompanyMetrics, market: &MarketConditions) -> RiskLevel {
    let stability = cash_stability(metrics.cash, metrics.burn_rate);

    if metrics.has_short_runway() || stability < HIGH_RISK_STABILITY {
        RiskLevel::High
    } else if stability < MEDIUM_RISK_STABILITY || is_crowded(market) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Competition at or above 7 out of 10.
pub(crate) fn is_crowded(market: &MarketConditions) -> bool {
    market.competition_level >= CROWDED_MARKET
}
