use super::domain::{CompanyMetrics, EconomicClimate, MarketConditions};

const FULL_RUNWAY_MONTHS: f64 = 24.0;
const CRITICAL_RUNWAY_MONTHS: f64 = 3.0;
const CRITICAL_STABILITY: f64 = 10.0;

const GROWTH_WEIGHT: f64 = 0.25;
const MARKET_SHARE_WEIGHT: f64 = 0.20;
const CASH_STABILITY_WEIGHT: f64 = 0.20;
const SATISFACTION_WEIGHT: f64 = 0.15;
const INVESTOR_CONFIDENCE_WEIGHT: f64 = 0.20;

/// Scores runway on a 10–100 scale; a company that burns nothing scores 100.
pub fn cash_stability(cash: f64, burn_rate: f64) -> f64 {
    if burn_rate <= 0.0 {
        return 100.0;
    }

    let runway_months = cash / burn_rate;
    if runway_months >= FULL_RUNWAY_MONTHS {
        return 100.0;
    }
    if runway_months <= CRITICAL_RUNWAY_MONTHS {
        return CRITICAL_STABILITY;
    }

    ((runway_months / FULL_RUNWAY_MONTHS) * 100.0).clamp(CRITICAL_STABILITY, 100.0)
}

/// Investor mood: pressure costs up to 40 points, growth above 10% earns up to 40.
pub fn investor_confidence(investor_pressure: f64, growth_rate: f64) -> f64 {
    let pressure_penalty = (investor_pressure / 10.0) * 40.0;
    let growth_boost = ((growth_rate - 10.0) * 2.0).clamp(-20.0, 40.0);
    (70.0 + growth_boost - pressure_penalty).clamp(0.0, 100.0)
}

/// Weighted contributions behind a health score.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthBreakdown {
    pub growth: f64,
    pub market_share: f64,
    pub cash_stability: f64,
    pub customer_satisfaction: f64,
    pub investor_confidence: f64,
    pub macro_adjustment: f64,
}

impl HealthBreakdown {
    pub fn base(&self) -> f64 {
        self.growth
            + self.market_share
            + self.cash_stability
            + self.customer_satisfaction
            + self.investor_confidence
    }

    pub fn score(&self) -> u8 {
        (self.base() + self.macro_adjustment)
            .clamp(0.0, 100.0)
            .round() as u8
    }
}

pub fn health_breakdown(metrics: &CompanyMetrics, market: &MarketConditions) -> HealthBreakdown {
    let stability = cash_stability(metrics.cash, metrics.burn_rate);
    let confidence = investor_confidence(metrics.investor_pressure, metrics.growth_rate);

    let normalized_growth = (metrics.growth_rate * 3.0).clamp(0.0, 100.0);
    let normalized_share = (metrics.market_share * 3.0).clamp(0.0, 100.0);
    let normalized_industry_growth = (market.industry_growth * 8.0).clamp(0.0, 100.0);

    let climate_adjustment = match market.economic_climate {
        EconomicClimate::Recession => -8.0,
        EconomicClimate::Boom => 5.0,
        EconomicClimate::Neutral => 0.0,
    };

    HealthBreakdown {
        growth: GROWTH_WEIGHT * normalized_growth,
        market_share: MARKET_SHARE_WEIGHT * normalized_share,
        cash_stability: CASH_STABILITY_WEIGHT * stability,
        customer_satisfaction: SATISFACTION_WEIGHT * metrics.customer_satisfaction,
        investor_confidence: INVESTOR_CONFIDENCE_WEIGHT * confidence,
        macro_adjustment: climate_adjustment + (normalized_industry_growth - 50.0) * 0.05,
    }
}

/// Composite 0–100 health figure. Rounds half away from zero after clamping.
pub fn health_score(metrics: &CompanyMetrics, market: &MarketConditions) -> u8 {
    health_breakdown(metrics, market).score()
}

/// Coarse reading of a health score for dashboards and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Healthy,
    Watchlist,
    Critical,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            HealthBand::Healthy
        } else if score >= 35 {
            HealthBand::Watchlist
        } else {
            HealthBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "Healthy",
            HealthBand::Watchlist => "Watchlist",
            HealthBand::Critical => "Critical",
        }
    }
}
