//! Deterministic founder decision engine.
//!
//! Everything here is a pure function over value types: scoring, risk classification,
//! per-decision metric transformations, and the quarter-by-quarter projection built on top.

pub(crate) mod decisions;
pub mod domain;
pub mod engine;
pub mod request;
pub mod risk;
pub mod scoring;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use domain::{
    CompanyMetrics, DecisionKind, EconomicClimate, FounderDecision, FundingEnvironment,
    MarketConditions, RiskLevel, SimulationResult, DEFAULT_MAGNITUDE,
};
pub use engine::{simulate, success_probability};
pub use request::{RequestValidationError, SimulationRequest};
pub use risk::risk_level;
pub use scoring::{
    cash_stability, health_breakdown, health_score, investor_confidence, HealthBand,
    HealthBreakdown,
};
pub use trajectory::{project_quarters, QuarterOutcome};
