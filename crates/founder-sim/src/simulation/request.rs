use super::domain::{CompanyMetrics, FounderDecision, MarketConditions};
use serde::{Deserialize, Serialize};

/// Inbound simulation payload: the company, its market, and the decision to project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub company: CompanyMetrics,
    pub market: MarketConditions,
    pub decision: FounderDecision,
}

/// Rejections raised before a request reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("decision magnitude {0} must be between 0 and 1")]
    InvalidMagnitude(f64),
}

impl SimulationRequest {
    pub fn new(
        company: CompanyMetrics,
        market: MarketConditions,
        decision: FounderDecision,
    ) -> Self {
        Self {
            company,
            market,
            decision,
        }
    }

    /// Checks that every numeric input is usable. The engine assumes this has passed.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        let company = &self.company;
        let market = &self.market;

        let mut fields = vec![
            ("company.cash", company.cash),
            ("company.burnRate", company.burn_rate),
            ("company.marketShare", company.market_share),
            ("company.growthRate", company.growth_rate),
            ("company.investorPressure", company.investor_pressure),
            ("company.customerSatisfaction", company.customer_satisfaction),
            ("market.competitionLevel", market.competition_level),
            ("market.industryGrowth", market.industry_growth),
        ];
        if let Some(valuation) = company.valuation {
            fields.push(("company.valuation", valuation));
        }
        if let Some(magnitude) = self.decision.magnitude {
            fields.push(("decision.magnitude", magnitude));
        }

        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RequestValidationError::NonFinite { field });
        }

        if let Some(magnitude) = self.decision.magnitude {
            if !(0.0..=1.0).contains(&magnitude) {
                return Err(RequestValidationError::InvalidMagnitude(magnitude));
            }
        }

        Ok(())
    }
}
