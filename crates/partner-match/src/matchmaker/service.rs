use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::http::StatusCode;
use serde::Serialize;

use super::assessment::{scenario_fields, FieldSpec};
use super::catalog::ProgramCatalog;
use super::domain::{AssessmentAnswers, ProgramRecord, Scenario};
use super::results::{build_table, filter_programs, CompareError, ComparisonTable, ProgramFilter};
use super::roi::{estimate, RoiError, RoiInputs, RoiProjection};
use super::scoring::{MatchEngine, MatchResult, ScoringConfig};

/// Service composing the catalog, the match engine, and the ROI estimator.
pub struct MatchmakerService {
    catalog: ProgramCatalog,
    engine: MatchEngine,
    simulated_latency: Option<Duration>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Process-unique opaque token for a submitted assessment. The sequence
/// suffix keeps ids distinct within one millisecond.
fn next_assessment_id() -> String {
    let seq = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let millis = chrono::Utc::now().timestamp_millis();
    format!("assessment-{millis}-{seq:04}")
}

impl MatchmakerService {
    pub fn new(catalog: ProgramCatalog, config: ScoringConfig) -> Self {
        Self {
            catalog,
            engine: MatchEngine::new(config),
            simulated_latency: None,
        }
    }

    /// Optional fixed delay the serving layer applies before returning
    /// scored results.
    pub fn with_simulated_latency(mut self, latency: Option<Duration>) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn simulated_latency(&self) -> Option<Duration> {
        self.simulated_latency
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn all_programs(&self) -> &[ProgramRecord] {
        self.catalog.programs()
    }

    pub fn programs(&self, filter: &ProgramFilter) -> Vec<&ProgramRecord> {
        filter_programs(self.catalog.programs(), filter)
    }

    pub fn program(&self, id: &str) -> Result<&ProgramRecord, MatchmakerError> {
        self.catalog
            .find(id)
            .ok_or_else(|| MatchmakerError::UnknownProgram(id.to_string()))
    }

    pub fn fields(&self, scenario: Scenario) -> &'static [FieldSpec] {
        scenario_fields(scenario)
    }

    /// Score the full catalog against the submitted answers and return the
    /// ranked shortlist under a fresh assessment id.
    pub fn submit_assessment(
        &self,
        scenario: Scenario,
        answers: &AssessmentAnswers,
    ) -> AssessmentOutcome {
        let matches = self.engine.rank(answers, self.catalog.programs());

        AssessmentOutcome {
            assessment_id: next_assessment_id(),
            scenario,
            matches,
        }
    }

    pub fn compare(&self, ids: &[String]) -> Result<ComparisonTable, MatchmakerError> {
        Ok(build_table(ids, &self.catalog)?)
    }

    pub fn estimate_roi(&self, inputs: &RoiInputs) -> Result<RoiProjection, MatchmakerError> {
        Ok(estimate(inputs)?)
    }
}

/// Submission result: the ranked matches plus a throwaway tracking token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub assessment_id: String,
    pub scenario: Scenario,
    pub matches: Vec<MatchResult>,
}

/// Error raised by the matchmaker service.
#[derive(Debug, thiserror::Error)]
pub enum MatchmakerError {
    #[error("no partner program with id '{0}'")]
    UnknownProgram(String),
    #[error(transparent)]
    Comparison(#[from] CompareError),
    #[error(transparent)]
    Roi(#[from] RoiError),
}

impl MatchmakerError {
    /// HTTP projection: unknown ids are not-found, everything else is a
    /// rejected computation.
    pub fn status_code(&self) -> StatusCode {
        match self {
            MatchmakerError::UnknownProgram(_)
            | MatchmakerError::Comparison(CompareError::UnknownProgram(_)) => {
                StatusCode::NOT_FOUND
            }
            MatchmakerError::Comparison(CompareError::NotEnoughSelections { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            MatchmakerError::Roi(RoiError::InvalidDuration)
            | MatchmakerError::Roi(RoiError::InvalidInput { .. })
            | MatchmakerError::Roi(RoiError::BreakEvenUndefined { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}
