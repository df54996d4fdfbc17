use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::{DecisionNarrator, NarrationPipeline};
use crate::error::AppError;
use crate::simulation::SimulationRequest;

/// Header naming the narrator behind a simulation response.
pub const NARRATION_SOURCE_HEADER: &str = "x-narration-source";

/// Router builder exposing the decision simulation endpoint.
pub fn simulation_router<N>(pipeline: Arc<NarrationPipeline<N>>) -> Router
where
    N: DecisionNarrator + 'static,
{
    Router::new()
        .route("/api/simulate-decision", post(simulate_handler::<N>))
        .with_state(pipeline)
}

pub(crate) async fn simulate_handler<N>(
    State(pipeline): State<Arc<NarrationPipeline<N>>>,
    Json(request): Json<SimulationRequest>,
) -> Result<Response, AppError>
where
    N: DecisionNarrator + 'static,
{
    request.validate()?;

    let narrated = pipeline.run(&request).await;
    Ok((
        [(NARRATION_SOURCE_HEADER, narrated.source.label())],
        Json(narrated.result),
    )
        .into_response())
}
