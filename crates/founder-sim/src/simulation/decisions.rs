//! Metric transformations for each founder decision kind.
//!
//! Handlers read pre-decision values from `before` and write into `after`, which starts as a
//! clone of `before`. Each handler appends its risk and opportunity sentences in display order.

use super::domain::{
    CompanyMetrics, DecisionKind, EconomicClimate, FounderDecision, FundingEnvironment,
    MarketConditions,
};
use super::risk::is_crowded;

/// Narrative collected while a decision is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DecisionEffects {
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}

impl DecisionEffects {
    fn risk(&mut self, sentence: &str) {
        self.risks.push(sentence.to_string());
    }

    fn opportunity(&mut self, sentence: &str) {
        self.opportunities.push(sentence.to_string());
    }
}

/// Applies `decision` to a copy of `before`. The input snapshot is never touched.
pub(crate) fn apply_decision(
    before: &CompanyMetrics,
    market: &MarketConditions,
    decision: &FounderDecision,
) -> (CompanyMetrics, DecisionEffects) {
    let mut after = before.clone();
    let mut effects = DecisionEffects::default();
    let magnitude = decision.effective_magnitude();

    match decision.kind {
        DecisionKind::RaiseFunding => raise_funding(before, &mut after, market, &mut effects),
        DecisionKind::Layoff => layoff(before, &mut after, magnitude, &mut effects),
        DecisionKind::IncreaseMarketing => {
            increase_marketing(before, &mut after, market, magnitude, &mut effects)
        }
        DecisionKind::PivotProduct => pivot_product(before, &mut after, market, &mut effects),
        DecisionKind::ReduceBurn => reduce_burn(before, &mut after, magnitude, &mut effects),
        DecisionKind::ExpandInternationally => {
            expand_internationally(before, &mut after, market, magnitude, &mut effects)
        }
        DecisionKind::Unrecognized => {
            effects.risk("Unknown decision type; minimal changes applied.");
        }
    }

    (after, effects)
}

fn raise_funding(
    before: &CompanyMetrics,
    after: &mut CompanyMetrics,
    market: &MarketConditions,
    effects: &mut DecisionEffects,
) {
    let multiplier = market.funding_environment.funding_multiplier();
    let raised = before.burn_rate * 12.0 * multiplier;
    after.cash += raised;
    after.investor_pressure = (before.investor_pressure - 2.0).max(3.0);

    // Seeded from pre-raise cash and growth when no valuation was tracked.
    let current_valuation = before
        .valuation
        .unwrap_or(before.cash * 10.0 + before.growth_rate * 100_000.0);
    after.valuation = Some(current_valuation * (1.0 + 0.1 * multiplier));

    effects.opportunity("New funding extends runway and unlocks strategic initiatives.");
    if market.funding_environment == FundingEnvironment::Tight {
        effects.risk("Tight funding environment may force unfavorable terms and dilution.");
    }
}

fn layoff(
    before: &CompanyMetrics,
    after: &mut CompanyMetrics,
    magnitude: f64,
    effects: &mut DecisionEffects,
) {
    let headcount = f64::from(before.employees);
    let employees_cut = (headcount * magnitude).round();
    after.employees = (headcount - employees_cut).max(1.0) as u32;
    after.burn_rate *= 1.0 - magnitude * 0.8;
    after.customer_satisfaction = (before.customer_satisfaction - 10.0).max(40.0);
    after.growth_rate = (before.growth_rate - 4.0).max(0.0);

    effects.risk("Layoffs can damage morale, slow execution, and hurt brand perception.");
    effects.opportunity("Reduced burn improves runway, buying time to find product-market fit.");
    if before.has_short_runway() {
        effects.opportunity("Cost cuts directly address high bankruptcy risk from short runway.");
    }
}

fn increase_marketing(
    before: &CompanyMetrics,
    after: &mut CompanyMetrics,
    market: &MarketConditions,
    magnitude: f64,
    effects: &mut DecisionEffects,
) {
    after.burn_rate += before.burn_rate * magnitude;

    let recession = market.economic_climate == EconomicClimate::Recession;
    let (growth_delta, share_delta) = if recession { (3.0, 1.0) } else { (5.0, 2.0) };
    after.growth_rate += growth_delta;
    after.market_share += share_delta;

    if recession {
        effects.risk(
            "Increasing marketing during a recession burns cash faster; demand may not materialize.",
        );
        effects.opportunity(
            "Competitors may cut spend, letting you capture outsized share if campaigns work.",
        );
    } else {
        effects.opportunity(
            "Aggressive marketing in healthy markets can accelerate growth and valuation.",
        );
    }
}

fn pivot_product(
    before: &CompanyMetrics,
    after: &mut CompanyMetrics,
    market: &MarketConditions,
    effects: &mut DecisionEffects,
) {
    after.growth_rate = (before.growth_rate - 2.0).max(0.0);
    after.customer_satisfaction = (before.customer_satisfaction - 15.0).max(30.0);

    if is_crowded(market) {
        effects.opportunity(
            "Pivoting in a crowded space can unlock a differentiated wedge if executed well.",
        );
    } else {
        effects.risk("Pivoting away from early traction may reset learning and delay revenue.");
    }
    effects.risk("Pivots introduce execution risk and may confuse existing customers.");
}

fn reduce_burn(
    before: &CompanyMetrics,
    after: &mut CompanyMetrics,
    magnitude: f64,
    effects: &mut DecisionEffects,
) {
    let reduction = before.burn_rate * magnitude;
    after.burn_rate = (before.burn_rate - reduction).max(0.0);
    after.growth_rate = (before.growth_rate - 2.0).max(0.0);

    effects.opportunity("Lower burn extends runway and reduces bankruptcy risk.");
    effects.risk("Over-optimizing for efficiency can underfund promising growth bets.");
}

fn expand_internationally(
    before: &CompanyMetrics,
    after: &mut CompanyMetrics,
    market: &MarketConditions,
    magnitude: f64,
    effects: &mut DecisionEffects,
) {
    after.burn_rate += before.burn_rate * (magnitude + 0.1);
    after.market_share += 2.0;
    after.growth_rate += 3.0;

    effects.risk("International expansion adds operational complexity and regulatory risk.");
    if market.economic_climate == EconomicClimate::Recession {
        effects.risk("Expanding globally in a recession may stretch the organization too thin.");
    }
    effects.opportunity(
        "New markets can diversify revenue and reduce dependence on a single region.",
    );
}
