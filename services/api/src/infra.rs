use founder_sim::config::NarratorConfig;
use founder_sim::narration::{HostedNarrator, NarrationPipeline};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wires the hosted narrator in front of the rule engine when an API key is configured.
pub(crate) fn build_pipeline(config: &NarratorConfig) -> NarrationPipeline<HostedNarrator> {
    if !config.hosted_enabled() {
        info!("no narrator API key configured; serving rule-based simulations only");
        return NarrationPipeline::rule_based_only();
    }

    match HostedNarrator::from_config(config) {
        Ok(narrator) => {
            info!(model = narrator.model(), "hosted narrator enabled");
            NarrationPipeline::new(Some(narrator))
        }
        Err(err) => {
            warn!(error = %err, "hosted narrator unavailable; using rule engine");
            NarrationPipeline::rule_based_only()
        }
    }
}
