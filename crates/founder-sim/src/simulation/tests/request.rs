use super::common::*;
use crate::simulation::domain::DecisionKind;
use crate::simulation::request::{RequestValidationError, SimulationRequest};
use serde_json::json;

fn request(magnitude: Option<f64>) -> SimulationRequest {
    SimulationRequest::new(
        technova(),
        recession_market(),
        decision(DecisionKind::Layoff, magnitude),
    )
}

#[test]
fn well_formed_request_passes() {
    assert_eq!(request(None).validate(), Ok(()));
    assert_eq!(request(Some(1.0)).validate(), Ok(()));
}

#[test]
fn non_finite_fields_are_named() {
    let mut bad = request(None);
    bad.company.burn_rate = f64::NAN;
    assert_eq!(
        bad.validate(),
        Err(RequestValidationError::NonFinite {
            field: "company.burnRate"
        })
    );

    let mut bad = request(None);
    bad.company.valuation = Some(f64::INFINITY);
    assert_eq!(
        bad.validate(),
        Err(RequestValidationError::NonFinite {
            field: "company.valuation"
        })
    );
}

#[test]
fn magnitude_must_be_a_fraction() {
    assert_eq!(request(Some(0.0)).validate(), Ok(()));
    assert_eq!(request(Some(1.0)).validate(), Ok(()));
    assert_eq!(
        request(Some(-0.1)).validate(),
        Err(RequestValidationError::InvalidMagnitude(-0.1))
    );
    assert_eq!(
        request(Some(1.5)).validate(),
        Err(RequestValidationError::InvalidMagnitude(1.5))
    );
}

#[test]
fn request_ignores_display_only_company_fields() {
    let parsed: SimulationRequest = serde_json::from_value(json!({
        "company": {
            "id": 1,
            "name": "TechNova",
            "cash": 500000,
            "valuation": 5000000,
            "burnRate": 50000,
            "employees": 12,
            "marketShare": 5,
            "growthRate": 12,
            "investorPressure": 7,
            "customerSatisfaction": 80
        },
        "market": {
            "id": 1,
            "competitionLevel": 8,
            "economicClimate": "Recession",
            "industryGrowth": 6,
            "fundingEnvironment": "Tight"
        },
        "decision": {
            "type": "layoff",
            "description": "Lay off 15% of team",
            "magnitude": 0.15
        }
    }))
    .expect("request parses");

    assert_eq!(parsed.company.valuation, Some(5_000_000.0));
    assert_eq!(parsed.decision.kind, DecisionKind::Layoff);
    assert_eq!(parsed.validate(), Ok(()));
}
