use crate::simulation::domain::{
    CompanyMetrics, DecisionKind, EconomicClimate, FounderDecision, FundingEnvironment,
    MarketConditions,
};

pub(super) fn technova() -> CompanyMetrics {
    CompanyMetrics {
        cash: 500_000.0,
        burn_rate: 50_000.0,
        employees: 12,
        market_share: 5.0,
        growth_rate: 12.0,
        investor_pressure: 7.0,
        customer_satisfaction: 80.0,
        valuation: None,
    }
}

pub(super) fn recession_market() -> MarketConditions {
    MarketConditions {
        competition_level: 8.0,
        economic_climate: EconomicClimate::Recession,
        industry_growth: 6.0,
        funding_environment: FundingEnvironment::Tight,
    }
}

pub(super) fn calm_market() -> MarketConditions {
    MarketConditions {
        competition_level: 3.0,
        economic_climate: EconomicClimate::Neutral,
        industry_growth: 5.0,
        funding_environment: FundingEnvironment::Normal,
    }
}

pub(super) fn decision(kind: DecisionKind, magnitude: Option<f64>) -> FounderDecision {
    FounderDecision {
        kind,
        description: format!("test {}", kind.key()),
        magnitude,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
