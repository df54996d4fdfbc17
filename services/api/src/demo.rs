use clap::Args;
use founder_sim::error::AppError;
use founder_sim::sandbox;
use founder_sim::simulation::{
    health_breakdown, project_quarters, simulate, CompanyMetrics, DecisionKind, EconomicClimate,
    FounderDecision, FundingEnvironment, HealthBand, MarketConditions, SimulationRequest,
};

const MAX_DEMO_QUARTERS: u32 = 40;

/// Decisions replayed by the demo, cycled when more quarters are requested.
const DEMO_SEQUENCE: [DecisionKind; 6] = [
    DecisionKind::ReduceBurn,
    DecisionKind::RaiseFunding,
    DecisionKind::IncreaseMarketing,
    DecisionKind::PivotProduct,
    DecisionKind::ExpandInternationally,
    DecisionKind::Layoff,
];

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Decision to simulate (raise_funding, layoff, increase_marketing, pivot_product, reduce_burn, expand_internationally)
    #[arg(long, value_parser = parse_decision)]
    pub(crate) decision: DecisionKind,
    /// Decision intensity in [0, 1]. Defaults to 0.2.
    #[arg(long)]
    pub(crate) magnitude: Option<f64>,
    /// Free-text description of the move.
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// Override the economic climate (Boom, Neutral, Recession).
    #[arg(long, value_parser = parse_climate)]
    pub(crate) climate: Option<EconomicClimate>,
    /// Override the funding environment (Frothy, Normal, Tight).
    #[arg(long, value_parser = parse_funding)]
    pub(crate) funding: Option<FundingEnvironment>,
    /// Override the competition level (0-10).
    #[arg(long)]
    pub(crate) competition: Option<f64>,
    /// Override industry growth (0-10).
    #[arg(long)]
    pub(crate) industry_growth: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of quarters to project (1-40).
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=MAX_DEMO_QUARTERS as i64))]
    pub(crate) quarters: u32,
}

pub(crate) fn parse_decision(raw: &str) -> Result<DecisionKind, String> {
    match DecisionKind::from_key(raw) {
        DecisionKind::Unrecognized => {
            let known: Vec<_> = DecisionKind::CATALOG.iter().map(|kind| kind.key()).collect();
            Err(format!(
                "unknown decision '{raw}' (expected one of: {})",
                known.join(", ")
            ))
        }
        kind => Ok(kind),
    }
}

pub(crate) fn parse_climate(raw: &str) -> Result<EconomicClimate, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "boom" => Ok(EconomicClimate::Boom),
        "neutral" => Ok(EconomicClimate::Neutral),
        "recession" => Ok(EconomicClimate::Recession),
        _ => Err(format!("unknown economic climate '{raw}'")),
    }
}

pub(crate) fn parse_funding(raw: &str) -> Result<FundingEnvironment, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "frothy" => Ok(FundingEnvironment::Frothy),
        "normal" => Ok(FundingEnvironment::Normal),
        "tight" => Ok(FundingEnvironment::Tight),
        _ => Err(format!("unknown funding environment '{raw}'")),
    }
}

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let SimulateArgs {
        decision,
        magnitude,
        description,
        climate,
        funding,
        competition,
        industry_growth,
    } = args;

    let company = sandbox::company();
    let mut market = sandbox::market().conditions;
    if let Some(climate) = climate {
        market.economic_climate = climate;
    }
    if let Some(funding) = funding {
        market.funding_environment = funding;
    }
    if let Some(competition) = competition {
        market.competition_level = competition;
    }
    if let Some(industry_growth) = industry_growth {
        market.industry_growth = industry_growth;
    }

    let mut founder_decision = FounderDecision::new(decision);
    founder_decision.magnitude = magnitude;
    if let Some(description) = description {
        founder_decision.description = description;
    }

    let request = SimulationRequest::new(company.metrics, market, founder_decision);
    request.validate()?;

    let result = simulate(&request.company, &request.market, &request.decision);

    println!(
        "{} | {} (magnitude {:.2})",
        company.name,
        request.decision.kind.label(),
        request.decision.effective_magnitude()
    );
    println!("\"{}\"", request.decision.description);
    render_market(&request.market);
    render_metrics(&request.company, &result.updated_metrics);

    let breakdown = health_breakdown(&result.updated_metrics, &request.market);
    println!("\nHealth breakdown");
    println!("  - Growth: {:.1}", breakdown.growth);
    println!("  - Market share: {:.1}", breakdown.market_share);
    println!("  - Cash stability: {:.1}", breakdown.cash_stability);
    println!(
        "  - Customer satisfaction: {:.1}",
        breakdown.customer_satisfaction
    );
    println!("  - Investor confidence: {:.1}", breakdown.investor_confidence);
    println!("  - Macro adjustment: {:+.1}", breakdown.macro_adjustment);

    println!(
        "\nHealth {} ({}) | Risk {} | Success probability {}%",
        result.health_score,
        HealthBand::from_score(result.health_score).label(),
        result.risk_level.label(),
        result.success_probability
    );

    print_lines("Risks", &result.risks);
    print_lines("Opportunities", &result.opportunities);
    println!("\nShort term: {}", result.short_term_impact);
    println!("Long term: {}", result.long_term_impact);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let company = sandbox::company();
    let market = sandbox::market().conditions;
    let decisions = demo_decisions(args.quarters);

    println!("Founder decision demo: {}", company.name);
    render_market(&market);

    let outcomes = project_quarters(&company.metrics, &market, &decisions);

    println!(
        "\n{:<4} {:<26} {:>7} {:>8} {:>12} {:>7} {:<7}",
        "Q", "Decision", "Health", "Success", "Cash", "Runway", "Risk"
    );
    for outcome in &outcomes {
        let metrics = &outcome.result.updated_metrics;
        println!(
            "{:<4} {:<26} {:>7} {:>7}% {:>12} {:>7} {:<7}",
            format!("Q{}", outcome.quarter),
            outcome.decision.label(),
            outcome.result.health_score,
            outcome.result.success_probability,
            format_currency(metrics.cash),
            format_runway(metrics),
            outcome.result.risk_level.label()
        );
    }

    if let Some(last) = outcomes.last() {
        println!(
            "\nAfter {} quarters: {} employees, burn {} / month, {} band",
            outcomes.len(),
            last.result.updated_metrics.employees,
            format_currency(last.result.updated_metrics.burn_rate),
            HealthBand::from_score(last.result.health_score).label()
        );
    }

    Ok(())
}

fn demo_decisions(quarters: u32) -> Vec<FounderDecision> {
    DEMO_SEQUENCE
        .iter()
        .cycle()
        .take(quarters as usize)
        .map(|kind| FounderDecision::new(*kind))
        .collect()
}

fn render_market(market: &MarketConditions) {
    println!(
        "Market: {} climate | {} funding | competition {:.0}/10 | industry growth {:.0}/10",
        market.economic_climate.label(),
        market.funding_environment.label(),
        market.competition_level,
        market.industry_growth
    );
}

fn render_metrics(before: &CompanyMetrics, after: &CompanyMetrics) {
    println!("\n{:<24} {:>14} {:>14}", "Metric", "Before", "After");
    let rows = [
        ("Cash", format_currency(before.cash), format_currency(after.cash)),
        (
            "Burn rate",
            format_currency(before.burn_rate),
            format_currency(after.burn_rate),
        ),
        ("Runway", format_runway(before), format_runway(after)),
        (
            "Employees",
            before.employees.to_string(),
            after.employees.to_string(),
        ),
        (
            "Market share",
            format!("{:.1}%", before.market_share),
            format!("{:.1}%", after.market_share),
        ),
        (
            "Growth rate",
            format!("{:.1}%", before.growth_rate),
            format!("{:.1}%", after.growth_rate),
        ),
        (
            "Investor pressure",
            format!("{:.1}", before.investor_pressure),
            format!("{:.1}", after.investor_pressure),
        ),
        (
            "Customer satisfaction",
            format!("{:.0}", before.customer_satisfaction),
            format!("{:.0}", after.customer_satisfaction),
        ),
    ];
    for (label, before, after) in rows {
        println!("{label:<24} {before:>14} {after:>14}");
    }
    if let (Some(before), Some(after)) = (before.valuation, after.valuation) {
        println!(
            "{:<24} {:>14} {:>14}",
            "Valuation",
            format_currency(before),
            format_currency(after)
        );
    }
}

fn print_lines(heading: &str, lines: &[String]) {
    if lines.is_empty() {
        println!("\n{heading}: none");
        return;
    }
    println!("\n{heading}:");
    for line in lines {
        println!("  - {line}");
    }
}

fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn format_runway(metrics: &CompanyMetrics) -> String {
    match metrics.runway_months() {
        Some(months) => format!("{months:.1}mo"),
        None => "n/a".to_string(),
    }
}
