use metrics_exporter_prometheus::PrometheusHandle;
use partner_match::matchmaker::{MatchmakerService, ProgramCatalog, Scenario, ScoringConfig};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Assembles the shared matchmaker: the standard catalog scored with the
/// default weights, optionally pacing submissions to match the product's
/// processing pause.
pub(crate) fn build_matchmaker(simulated_latency: Option<Duration>) -> MatchmakerService {
    MatchmakerService::new(ProgramCatalog::standard(), ScoringConfig::default())
        .with_simulated_latency(simulated_latency)
}

pub(crate) fn parse_scenario(raw: &str) -> Result<Scenario, String> {
    raw.parse::<Scenario>().map_err(|err| err.to_string())
}
