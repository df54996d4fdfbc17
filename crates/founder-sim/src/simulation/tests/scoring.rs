use super::common::*;
use crate::simulation::domain::{
    CompanyMetrics, EconomicClimate, FundingEnvironment, MarketConditions,
};
use crate::simulation::scoring::{
    cash_stability, health_breakdown, health_score, investor_confidence, HealthBand,
};

#[test]
fn cash_stability_is_full_without_burn() {
    assert_eq!(cash_stability(0.0, 0.0), 100.0);
    assert_eq!(cash_stability(-50_000.0, 0.0), 100.0);
    assert_eq!(cash_stability(10_000.0, -5.0), 100.0);
}

#[test]
fn cash_stability_boundaries_are_inclusive() {
    assert_eq!(cash_stability(2_400_000.0, 100_000.0), 100.0);
    assert_eq!(cash_stability(300_000.0, 100_000.0), 10.0);
    assert_eq!(cash_stability(10_000.0, 100_000.0), 10.0);
    assert!(cash_stability(300_100.0, 100_000.0) > 10.0);
    assert!(cash_stability(2_399_000.0, 100_000.0) < 100.0);
}

#[test]
fn cash_stability_interpolates_runway_linearly() {
    assert_close(cash_stability(1_200_000.0, 100_000.0), 50.0);
    assert_close(cash_stability(500_000.0, 50_000.0), 41.666_666_666_666_664);
}

#[test]
fn investor_confidence_balances_growth_against_pressure() {
    assert_close(investor_confidence(0.0, 10.0), 70.0);
    assert_close(investor_confidence(7.0, 12.0), 46.0);
    assert_close(investor_confidence(10.0, -100.0), 10.0);
    assert_close(investor_confidence(0.0, 100.0), 100.0);
    assert_close(investor_confidence(20.0, 0.0), 0.0);
}

#[test]
fn health_score_matches_reference_scenario() {
    assert_eq!(health_score(&technova(), &recession_market()), 33);
    assert_eq!(health_score(&technova(), &calm_market()), 41);
}

#[test]
fn health_breakdown_exposes_weighted_components() {
    let breakdown = health_breakdown(&technova(), &recession_market());

    assert_close(breakdown.growth, 9.0);
    assert_close(breakdown.market_share, 3.0);
    assert_close(breakdown.cash_stability, 8.333_333_333_333_332);
    assert_close(breakdown.customer_satisfaction, 12.0);
    assert_close(breakdown.investor_confidence, 9.2);
    assert_close(breakdown.macro_adjustment, -8.1);
    assert_eq!(breakdown.score(), 33);
}

#[test]
fn health_score_is_clamped_to_percentage_range() {
    let thriving = CompanyMetrics {
        cash: 10_000_000.0,
        burn_rate: 0.0,
        employees: 80,
        market_share: 50.0,
        growth_rate: 50.0,
        investor_pressure: 0.0,
        customer_satisfaction: 100.0,
        valuation: None,
    };
    let boom = MarketConditions {
        competition_level: 1.0,
        economic_climate: EconomicClimate::Boom,
        industry_growth: 10.0,
        funding_environment: FundingEnvironment::Frothy,
    };
    assert_eq!(health_score(&thriving, &boom), 100);

    let collapsing = CompanyMetrics {
        cash: 0.0,
        burn_rate: 100_000.0,
        employees: 1,
        market_share: 0.0,
        growth_rate: 0.0,
        investor_pressure: 10.0,
        customer_satisfaction: 0.0,
        valuation: None,
    };
    let bust = MarketConditions {
        competition_level: 10.0,
        economic_climate: EconomicClimate::Recession,
        industry_growth: 0.0,
        funding_environment: FundingEnvironment::Tight,
    };
    assert_eq!(health_score(&collapsing, &bust), 0);
}

#[test]
fn health_score_is_deterministic() {
    let first = health_score(&technova(), &recession_market());
    let second = health_score(&technova(), &recession_market());
    assert_eq!(first, second);
}

#[test]
fn health_band_thresholds() {
    assert_eq!(HealthBand::from_score(70), HealthBand::Healthy);
    assert_eq!(HealthBand::from_score(69), HealthBand::Watchlist);
    assert_eq!(HealthBand::from_score(35), HealthBand::Watchlist);
    assert_eq!(HealthBand::from_score(34), HealthBand::Critical);
    assert_eq!(HealthBand::from_score(0).label(), "Critical");
}
