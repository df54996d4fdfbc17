//! Seed records for the sandbox experience: one company, its market, and a demo login.
//!
//! Nothing here is persisted; every call hands back a fresh value.

use serde::Serialize;

use crate::simulation::{CompanyMetrics, EconomicClimate, FundingEnvironment, MarketConditions};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SandboxCompany {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub metrics: CompanyMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SandboxMarket {
    pub id: u32,
    #[serde(flatten)]
    pub conditions: MarketConditions,
}

/// Public view of a sandbox account. Credentials never leave this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandboxAccount {
    pub id: u32,
    pub email: String,
    pub name: String,
}

struct Credential {
    id: u32,
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

const CREDENTIALS: &[Credential] = &[Credential {
    id: 1,
    email: "founder@example.com",
    password: "foundr123",
    name: "Demo Founder",
}];

pub fn company() -> SandboxCompany {
    SandboxCompany {
        id: 1,
        name: "TechNova".to_string(),
        metrics: CompanyMetrics {
            cash: 500_000.0,
            burn_rate: 50_000.0,
            employees: 12,
            market_share: 5.0,
            growth_rate: 12.0,
            investor_pressure: 7.0,
            customer_satisfaction: 80.0,
            valuation: Some(5_000_000.0),
        },
    }
}

pub fn market() -> SandboxMarket {
    SandboxMarket {
        id: 1,
        conditions: MarketConditions {
            competition_level: 8.0,
            economic_climate: EconomicClimate::Recession,
            industry_growth: 6.0,
            funding_environment: FundingEnvironment::Tight,
        },
    }
}

/// Matches an email/password pair against the sandbox accounts. Emails compare case-insensitively.
pub fn authenticate(email: &str, password: &str) -> Option<SandboxAccount> {
    CREDENTIALS
        .iter()
        .find(|credential| {
            credential.email.eq_ignore_ascii_case(email.trim()) && credential.password == password
        })
        .map(|credential| SandboxAccount {
            id: credential.id,
            email: credential.email.to_string(),
            name: credential.name.to_string(),
        })
}
