use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::time::sleep;
use tracing::{debug, instrument};

use super::{DecisionNarrator, NarrationError};
use crate::config::NarratorConfig;
use crate::simulation::{
    health_score, risk_level, CompanyMetrics, RiskLevel, SimulationRequest, SimulationResult,
};

/// Narrator backed by a hosted language model speaking the OpenAI Responses API.
pub struct HostedNarrator {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_retries: u32,
}

impl HostedNarrator {
    pub fn from_config(config: &NarratorConfig) -> Result<Self, NarrationError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| NarrationError::Unavailable("OPENAI_API_KEY is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| NarrationError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            endpoint: format!("{}/responses", config.base_url.trim_end_matches('/')),
            max_retries: config.max_retries,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(decision = request.decision.kind.key(), model = %self.model))]
    pub async fn generate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, NarrationError> {
        let payload = json!({
            "model": self.model,
            "input": build_prompt(request),
            "text": { "format": { "type": "json_object" } },
        });

        let text = self.request_text(&payload).await?;
        parse_narrated_result(&text, request)
    }

    async fn request_text(&self, payload: &Value) -> Result<String, NarrationError> {
        let mut attempt = 0u32;
        loop {
            let send_result = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(payload)
                .send()
                .await;

            match send_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        if status.as_u16() == 429 && attempt < self.max_retries {
                            attempt += 1;
                            backoff(attempt).await;
                            continue;
                        }
                        return Err(NarrationError::HttpStatus {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    let body: Value = response
                        .json()
                        .await
                        .map_err(|err| NarrationError::Transport(err.to_string()))?;
                    return extract_output_text(&body).map(str::to_string);
                }
                Err(err) => {
                    if attempt < self.max_retries {
                        attempt += 1;
                        debug!(attempt, error = %err, "retrying narrator request");
                        backoff(attempt).await;
                        continue;
                    }
                    if err.is_timeout() {
                        return Err(NarrationError::Timeout);
                    }
                    return Err(NarrationError::Transport(err.to_string()));
                }
            }
        }
    }
}

impl DecisionNarrator for HostedNarrator {
    fn name(&self) -> &'static str {
        "hosted"
    }

    async fn narrate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, NarrationError> {
        self.generate(request).await
    }
}

async fn backoff(attempt: u32) {
    sleep(Duration::from_millis(150 * u64::from(attempt))).await;
}

fn build_prompt(request: &SimulationRequest) -> String {
    let company = &request.company;
    let market = &request.market;
    let valuation = company
        .valuation
        .map(|value| format!("{value:.0}"))
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        r#"You are an experienced startup operator and venture investor. Simulate the consequences of a founder decision for the next quarter and respond with pure JSON only.

Company metrics:
- Cash: {cash}
- Burn Rate: {burn_rate}
- Employees: {employees}
- Market Share: {market_share}
- Growth Rate: {growth_rate}
- Investor Pressure (0-10): {investor_pressure}
- Customer Satisfaction (0-100): {customer_satisfaction}
- Valuation: {valuation}

Market conditions:
- Economic Climate: {climate}
- Competition Level (0-10): {competition}
- Industry Growth (0-10): {industry_growth}
- Funding Environment: {funding}

Founder decision ({kind}, magnitude {magnitude}):
"{description}"

Return a JSON object with:
- updatedMetrics: {{ cash, burnRate, employees (integer), marketShare, growthRate, investorPressure, customerSatisfaction }}
- risks: string[]
- opportunities: string[]
- shortTermImpact: string
- longTermImpact: string
- successProbability: number (0-100)
- riskLevel: "Low" | "Medium" | "High"
- healthScore: number (0-100)

Respond with valid JSON only, without markdown or commentary."#,
        cash = company.cash,
        burn_rate = company.burn_rate,
        employees = company.employees,
        market_share = company.market_share,
        growth_rate = company.growth_rate,
        investor_pressure = company.investor_pressure,
        customer_satisfaction = company.customer_satisfaction,
        climate = market.economic_climate.label(),
        competition = market.competition_level,
        industry_growth = market.industry_growth,
        funding = market.funding_environment.label(),
        kind = request.decision.kind.key(),
        magnitude = request.decision.effective_magnitude(),
        description = request.decision.description,
    )
}

/// Finds the first `output_text` block in a Responses API body.
pub(crate) fn extract_output_text(body: &Value) -> Result<&str, NarrationError> {
    body.get("output")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .find(|content| content.get("type").and_then(Value::as_str) == Some("output_text"))
        .and_then(|content| content.get("text").and_then(Value::as_str))
        .ok_or(NarrationError::MissingOutput)
}

/// Model output, read leniently: scores and headcount may be fractional and the labels
/// free-form. Unrecognized risk labels are dropped rather than failing the narration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NarratedPayload {
    updated_metrics: NarratedMetrics,
    #[serde(default)]
    risks: Vec<String>,
    #[serde(default)]
    opportunities: Vec<String>,
    short_term_impact: String,
    long_term_impact: String,
    success_probability: f64,
    #[serde(default)]
    risk_level: Option<Value>,
    #[serde(default)]
    health_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NarratedMetrics {
    cash: f64,
    burn_rate: f64,
    employees: f64,
    market_share: f64,
    growth_rate: f64,
    investor_pressure: f64,
    customer_satisfaction: f64,
    #[serde(default)]
    valuation: Option<f64>,
}

impl NarratedMetrics {
    fn into_metrics(self, fallback_valuation: Option<f64>) -> CompanyMetrics {
        CompanyMetrics {
            cash: self.cash,
            burn_rate: self.burn_rate,
            employees: headcount(self.employees),
            market_share: self.market_share,
            growth_rate: self.growth_rate,
            investor_pressure: self.investor_pressure,
            customer_satisfaction: self.customer_satisfaction,
            valuation: self.valuation.or(fallback_valuation),
        }
    }
}

fn headcount(value: f64) -> u32 {
    if value.is_finite() {
        value.round().clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn parse_risk_label(value: &Value) -> Option<RiskLevel> {
    match value.as_str()?.trim().to_ascii_lowercase().as_str() {
        "low" => Some(RiskLevel::Low),
        "medium" => Some(RiskLevel::Medium),
        "high" => Some(RiskLevel::High),
        _ => None,
    }
}

impl NarratedPayload {
    fn into_result(self, request: &SimulationRequest) -> SimulationResult {
        let updated_metrics = self
            .updated_metrics
            .into_metrics(request.company.valuation);

        let health_score = self
            .health_score
            .map(as_percentage)
            .unwrap_or_else(|| health_score(&updated_metrics, &request.market));
        let risk_level = self
            .risk_level
            .as_ref()
            .and_then(parse_risk_label)
            .unwrap_or_else(|| risk_level(&updated_metrics, &request.market));

        SimulationResult {
            updated_metrics,
            risks: self.risks,
            opportunities: self.opportunities,
            short_term_impact: self.short_term_impact,
            long_term_impact: self.long_term_impact,
            success_probability: as_percentage(self.success_probability),
            risk_level,
            health_score,
        }
    }
}

fn as_percentage(value: f64) -> u8 {
    if value.is_finite() {
        value.clamp(0.0, 100.0).round() as u8
    } else {
        0
    }
}

/// Trims any wrapper text around the outermost JSON object and parses it.
pub(crate) fn parse_narrated_result(
    text: &str,
    request: &SimulationRequest,
) -> Result<SimulationResult, NarrationError> {
    let start = text.find('{').unwrap_or(0);
    let end = text.rfind('}').map(|index| index + 1).unwrap_or(text.len());
    let json = if start < end { &text[start..end] } else { text };

    let payload: NarratedPayload = serde_json::from_str(json)?;
    Ok(payload.into_result(request))
}
