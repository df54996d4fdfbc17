use serde::{Deserialize, Serialize};

/// Magnitude applied when a decision does not carry one.
pub const DEFAULT_MAGNITUDE: f64 = 0.2;

/// Snapshot of the company state that decisions operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    pub cash: f64,
    pub burn_rate: f64,
    pub employees: u32,
    pub market_share: f64,
    pub growth_rate: f64,
    /// 0–10 scale.
    pub investor_pressure: f64,
    /// 0–100 scale.
    pub customer_satisfaction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation: Option<f64>,
}

impl CompanyMetrics {
    /// Months of operation left at the current burn. `None` when nothing is burning.
    pub fn runway_months(&self) -> Option<f64> {
        if self.burn_rate <= 0.0 {
            None
        } else {
            Some(self.cash / self.burn_rate)
        }
    }

    /// Less than six months of cash at the current burn.
    pub fn has_short_runway(&self) -> bool {
        self.burn_rate > self.cash / 6.0
    }
}

/// Macro backdrop for a simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketConditions {
    /// 0–10 scale.
    pub competition_level: f64,
    pub economic_climate: EconomicClimate,
    /// 0–10 scale.
    pub industry_growth: f64,
    pub funding_environment: FundingEnvironment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EconomicClimate {
    Boom,
    Neutral,
    Recession,
}

impl EconomicClimate {
    pub fn label(&self) -> &'static str {
        match self {
            EconomicClimate::Boom => "Boom",
            EconomicClimate::Neutral => "Neutral",
            EconomicClimate::Recession => "Recession",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingEnvironment {
    Frothy,
    Normal,
    Tight,
}

impl FundingEnvironment {
    pub fn label(&self) -> &'static str {
        match self {
            FundingEnvironment::Frothy => "Frothy",
            FundingEnvironment::Normal => "Normal",
            FundingEnvironment::Tight => "Tight",
        }
    }

    /// Share of a year's burn investors are willing to fund.
    pub fn funding_multiplier(&self) -> f64 {
        match self {
            FundingEnvironment::Frothy => 1.4,
            FundingEnvironment::Normal => 1.0,
            FundingEnvironment::Tight => 0.6,
        }
    }
}

/// Strategic moves a founder can make in a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    RaiseFunding,
    Layoff,
    IncreaseMarketing,
    PivotProduct,
    ReduceBurn,
    ExpandInternationally,
    /// Any kind this engine does not know how to apply.
    #[serde(other)]
    Unrecognized,
}

impl DecisionKind {
    /// Decision kinds offered to founders, in menu order.
    pub const CATALOG: [DecisionKind; 6] = [
        DecisionKind::RaiseFunding,
        DecisionKind::Layoff,
        DecisionKind::IncreaseMarketing,
        DecisionKind::PivotProduct,
        DecisionKind::ReduceBurn,
        DecisionKind::ExpandInternationally,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DecisionKind::RaiseFunding => "raise_funding",
            DecisionKind::Layoff => "layoff",
            DecisionKind::IncreaseMarketing => "increase_marketing",
            DecisionKind::PivotProduct => "pivot_product",
            DecisionKind::ReduceBurn => "reduce_burn",
            DecisionKind::ExpandInternationally => "expand_internationally",
            DecisionKind::Unrecognized => "unrecognized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DecisionKind::RaiseFunding => "Raise funding",
            DecisionKind::Layoff => "Layoff employees",
            DecisionKind::IncreaseMarketing => "Increase marketing spend",
            DecisionKind::PivotProduct => "Pivot product",
            DecisionKind::ReduceBurn => "Reduce burn",
            DecisionKind::ExpandInternationally => "Expand internationally",
            DecisionKind::Unrecognized => "Unrecognized decision",
        }
    }

    /// Sample description shown next to the decision in pickers.
    pub fn example_description(&self) -> &'static str {
        match self {
            DecisionKind::RaiseFunding => "Raise a Series A of $5M at improved terms",
            DecisionKind::Layoff => "Lay off 15% of team, mainly ops",
            DecisionKind::IncreaseMarketing => "Increase performance marketing budget by 20%",
            DecisionKind::PivotProduct => "Pivot from SMB to mid-market focus",
            DecisionKind::ReduceBurn => "Cut non-core tools and contractors by 25%",
            DecisionKind::ExpandInternationally => "Launch in EU market with local sales pod",
            DecisionKind::Unrecognized => "",
        }
    }

    /// Parses the wire key; unknown keys map to [`DecisionKind::Unrecognized`].
    pub fn from_key(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "raise_funding" => DecisionKind::RaiseFunding,
            "layoff" => DecisionKind::Layoff,
            "increase_marketing" => DecisionKind::IncreaseMarketing,
            "pivot_product" => DecisionKind::PivotProduct,
            "reduce_burn" => DecisionKind::ReduceBurn,
            "expand_internationally" => DecisionKind::ExpandInternationally,
            _ => DecisionKind::Unrecognized,
        }
    }
}

/// Founder move submitted for simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderDecision {
    #[serde(rename = "type")]
    pub kind: DecisionKind,
    /// Free text shown to humans and hosted narrators; the rule engine ignores it.
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
}

impl FounderDecision {
    pub fn new(kind: DecisionKind) -> Self {
        Self {
            kind,
            description: kind.example_description().to_string(),
            magnitude: None,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn effective_magnitude(&self) -> f64 {
        self.magnitude.unwrap_or(DEFAULT_MAGNITUDE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Projected outcome of a single decision for the next quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub updated_metrics: CompanyMetrics,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub short_term_impact: String,
    pub long_term_impact: String,
    pub success_probability: u8,
    pub risk_level: RiskLevel,
    pub health_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decision_kind_accepts_unknown_types() {
        let decision: FounderDecision = serde_json::from_value(json!({
            "type": "acquire_competitor",
            "description": "Buy the rival"
        }))
        .expect("decision parses");

        assert_eq!(decision.kind, DecisionKind::Unrecognized);
        assert_eq!(decision.effective_magnitude(), DEFAULT_MAGNITUDE);
    }

    #[test]
    fn decision_kind_keys_round_trip_through_from_key() {
        for kind in DecisionKind::CATALOG {
            assert_eq!(DecisionKind::from_key(kind.key()), kind);
        }
        assert_eq!(DecisionKind::from_key("hire_ceo"), DecisionKind::Unrecognized);
    }

    #[test]
    fn metrics_use_camel_case_field_names() {
        let metrics = CompanyMetrics {
            cash: 1.0,
            burn_rate: 2.0,
            employees: 3,
            market_share: 4.0,
            growth_rate: 5.0,
            investor_pressure: 6.0,
            customer_satisfaction: 7.0,
            valuation: None,
        };

        let value = serde_json::to_value(&metrics).expect("serializes");
        assert_eq!(value["burnRate"], json!(2.0));
        assert_eq!(value["customerSatisfaction"], json!(7.0));
        assert!(value.get("valuation").is_none());
    }

    #[test]
    fn market_enums_use_contract_spellings() {
        let market: MarketConditions = serde_json::from_value(json!({
            "competitionLevel": 4,
            "economicClimate": "Boom",
            "industryGrowth": 5,
            "fundingEnvironment": "Frothy"
        }))
        .expect("market parses");

        assert_eq!(market.economic_climate, EconomicClimate::Boom);
        assert_eq!(market.funding_environment, FundingEnvironment::Frothy);
        assert_eq!(
            serde_json::to_value(RiskLevel::Medium).expect("serializes"),
            json!("Medium")
        );
    }
}
