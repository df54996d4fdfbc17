use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use founder_sim::sandbox::{self, SandboxCompany, SandboxMarket};
use founder_sim::simulation::DecisionKind;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DecisionOption {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) example: &'static str,
}

pub(crate) fn with_sandbox_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/company", get(company_endpoint))
        .route("/api/market", get(market_endpoint))
        .route("/api/decisions", get(decisions_endpoint))
        .route("/api/login", post(login_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    if ready {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn company_endpoint() -> Json<SandboxCompany> {
    Json(sandbox::company())
}

pub(crate) async fn market_endpoint() -> Json<SandboxMarket> {
    Json(sandbox::market())
}

pub(crate) async fn decisions_endpoint() -> Json<Vec<DecisionOption>> {
    Json(
        DecisionKind::CATALOG
            .iter()
            .map(|kind| DecisionOption {
                key: kind.key(),
                label: kind.label(),
                example: kind.example_description(),
            })
            .collect(),
    )
}

pub(crate) async fn login_endpoint(Json(payload): Json<LoginRequest>) -> Response {
    match sandbox::authenticate(&payload.email, &payload.password) {
        Some(account) => {
            info!(account_id = account.id, "sandbox login");
            Json(account).into_response()
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response(),
    }
}
