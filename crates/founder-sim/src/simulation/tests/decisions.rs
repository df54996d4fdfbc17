use super::common::*;
use crate::simulation::domain::{DecisionKind, EconomicClimate, FundingEnvironment};
use crate::simulation::engine::simulate;

#[test]
fn layoff_trims_headcount_and_burn() {
    let result = simulate(
        &technova(),
        &recession_market(),
        &decision(DecisionKind::Layoff, Some(0.15)),
    );

    let updated = &result.updated_metrics;
    assert_eq!(updated.employees, 10);
    assert_close(updated.burn_rate, 44_000.0);
    assert_close(updated.customer_satisfaction, 70.0);
    assert_close(updated.growth_rate, 8.0);
    assert_eq!(
        result.risks,
        vec!["Layoffs can damage morale, slow execution, and hurt brand perception."]
    );
    assert_eq!(
        result.opportunities,
        vec!["Reduced burn improves runway, buying time to find product-market fit."]
    );
}

#[test]
fn layoff_with_short_runway_flags_bankruptcy_relief() {
    let mut metrics = technova();
    metrics.cash = 200_000.0;

    let result = simulate(
        &metrics,
        &recession_market(),
        &decision(DecisionKind::Layoff, None),
    );

    assert_eq!(result.opportunities.len(), 2);
    assert!(result.opportunities[1].contains("bankruptcy risk"));
}

#[test]
fn layoff_never_drops_below_one_employee() {
    for (employees, magnitude) in [(1, 1.0), (3, 1.0), (2, 0.9), (1, 0.5), (40, 0.99)] {
        let mut metrics = technova();
        metrics.employees = employees;

        let result = simulate(
            &metrics,
            &calm_market(),
            &decision(DecisionKind::Layoff, Some(magnitude)),
        );

        assert!(
            result.updated_metrics.employees >= 1,
            "{employees} employees at magnitude {magnitude} left none"
        );
    }
}

#[test]
fn layoff_floors_satisfaction_and_growth() {
    let mut metrics = technova();
    metrics.customer_satisfaction = 45.0;
    metrics.growth_rate = 2.0;

    let result = simulate(&metrics, &calm_market(), &decision(DecisionKind::Layoff, None));

    assert_close(result.updated_metrics.customer_satisfaction, 40.0);
    assert_close(result.updated_metrics.growth_rate, 0.0);
}

#[test]
fn raise_funding_scales_with_funding_environment() {
    let mut market = recession_market();
    market.funding_environment = FundingEnvironment::Frothy;

    let result = simulate(
        &technova(),
        &market,
        &decision(DecisionKind::RaiseFunding, None),
    );

    let updated = &result.updated_metrics;
    assert_close(updated.cash, 1_340_000.0);
    assert_close(updated.investor_pressure, 5.0);
    // Seeded from pre-raise cash and growth: (5_000_000 + 1_200_000) * 1.14.
    assert_close(updated.valuation.expect("valuation set"), 7_068_000.0);
    assert!(result.risks.is_empty());
    assert_eq!(
        result.opportunities,
        vec!["New funding extends runway and unlocks strategic initiatives."]
    );
}

#[test]
fn raise_funding_in_tight_market_warns_about_terms() {
    let mut metrics = technova();
    metrics.valuation = Some(5_000_000.0);
    metrics.investor_pressure = 4.0;

    let result = simulate(
        &metrics,
        &recession_market(),
        &decision(DecisionKind::RaiseFunding, None),
    );

    let updated = &result.updated_metrics;
    assert_close(updated.cash, 860_000.0);
    assert_close(updated.investor_pressure, 3.0);
    assert_close(updated.valuation.expect("valuation set"), 5_300_000.0);
    assert_eq!(
        result.risks,
        vec!["Tight funding environment may force unfavorable terms and dilution."]
    );
}

#[test]
fn marketing_push_is_muted_in_recession() {
    let result = simulate(
        &technova(),
        &recession_market(),
        &decision(DecisionKind::IncreaseMarketing, None),
    );

    let updated = &result.updated_metrics;
    assert_close(updated.burn_rate, 60_000.0);
    assert_close(updated.growth_rate, 15.0);
    assert_close(updated.market_share, 6.0);
    assert_eq!(result.risks.len(), 1);
    assert!(result.opportunities[0].starts_with("Competitors may cut spend"));
}

#[test]
fn marketing_push_in_healthy_market_has_no_risks() {
    let result = simulate(
        &technova(),
        &calm_market(),
        &decision(DecisionKind::IncreaseMarketing, Some(0.5)),
    );

    let updated = &result.updated_metrics;
    assert_close(updated.burn_rate, 75_000.0);
    assert_close(updated.growth_rate, 17.0);
    assert_close(updated.market_share, 7.0);
    assert!(result.risks.is_empty());
    assert_eq!(
        result.short_term_impact,
        "Short term, this decision should be relatively smooth to absorb operationally."
    );
}

#[test]
fn pivot_in_crowded_market_opens_a_wedge() {
    let result = simulate(
        &technova(),
        &recession_market(),
        &decision(DecisionKind::PivotProduct, None),
    );

    assert_close(result.updated_metrics.growth_rate, 10.0);
    assert_close(result.updated_metrics.customer_satisfaction, 65.0);
    assert_eq!(
        result.opportunities,
        vec!["Pivoting in a crowded space can unlock a differentiated wedge if executed well."]
    );
    assert_eq!(
        result.risks,
        vec!["Pivots introduce execution risk and may confuse existing customers."]
    );
}

#[test]
fn pivot_in_quiet_market_risks_resetting_traction() {
    let mut metrics = technova();
    metrics.customer_satisfaction = 35.0;

    let result = simulate(
        &metrics,
        &calm_market(),
        &decision(DecisionKind::PivotProduct, None),
    );

    assert_close(result.updated_metrics.customer_satisfaction, 30.0);
    assert!(result.opportunities.is_empty());
    assert_eq!(
        result.risks,
        vec![
            "Pivoting away from early traction may reset learning and delay revenue.",
            "Pivots introduce execution risk and may confuse existing customers.",
        ]
    );
    assert_eq!(
        result.long_term_impact,
        "Long term impact appears limited unless combined with additional strategic moves."
    );
}

#[test]
fn reduce_burn_cuts_spend_and_growth() {
    let result = simulate(
        &technova(),
        &calm_market(),
        &decision(DecisionKind::ReduceBurn, Some(0.25)),
    );

    assert_close(result.updated_metrics.burn_rate, 37_500.0);
    assert_close(result.updated_metrics.growth_rate, 10.0);
    assert_eq!(result.opportunities.len(), 1);
    assert_eq!(result.risks.len(), 1);

    let full_cut = simulate(
        &technova(),
        &calm_market(),
        &decision(DecisionKind::ReduceBurn, Some(1.0)),
    );
    assert_close(full_cut.updated_metrics.burn_rate, 0.0);
}

#[test]
fn international_expansion_adds_recession_warning() {
    let result = simulate(
        &technova(),
        &recession_market(),
        &decision(DecisionKind::ExpandInternationally, None),
    );

    let updated = &result.updated_metrics;
    assert_close(updated.burn_rate, 65_000.0);
    assert_close(updated.market_share, 7.0);
    assert_close(updated.growth_rate, 15.0);
    assert_eq!(result.risks.len(), 2);
    assert!(result.risks[1].contains("recession"));

    let mut market = calm_market();
    market.economic_climate = EconomicClimate::Boom;
    let boom = simulate(
        &technova(),
        &market,
        &decision(DecisionKind::ExpandInternationally, None),
    );
    assert_eq!(boom.risks.len(), 1);
}

#[test]
fn unrecognized_decision_leaves_metrics_alone() {
    let metrics = technova();
    let result = simulate(
        &metrics,
        &recession_market(),
        &decision(DecisionKind::Unrecognized, Some(0.9)),
    );

    assert_eq!(result.updated_metrics, metrics);
    assert_eq!(
        result.risks,
        vec!["Unknown decision type; minimal changes applied."]
    );
    assert!(result.opportunities.is_empty());
}
