//! Partner program matchmaking.
//!
//! A scenario-specific wizard flow accumulates answers, then the match
//! engine scores the static catalog against them. The results layer
//! refines the shortlist with filters, sort keys, and side-by-side
//! comparison. An independent ROI estimator projects partnership
//! economics, and the router exposes everything over HTTP.

pub mod assessment;
pub mod catalog;
pub mod domain;
pub mod results;
pub mod roi;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use assessment::{
    scenario_fields, AssessmentFlow, CompanionField, CompanionTrigger, FieldKind, FieldSpec,
    StepInput, StepOutcome, ValidationError,
};
pub use catalog::{standard_programs, ProgramCatalog};
pub use domain::{
    AnswerValue, AssessmentAnswers, MaturityTier, ProgramId, ProgramRecord, QuestionKey,
    Scenario, ScenarioParseError, SupportLevel,
};
pub use results::{
    filter_programs, matches_filter, sort_matches, CompareError, ComparisonAttribute,
    ComparisonColumn, ComparisonRow, ComparisonSelection, ComparisonTable, ComparisonValue,
    ProgramFilter, SortKey,
};
pub use roi::{RoiError, RoiInputs, RoiMonth, RoiProjection};
pub use router::{matchmaker_router, CompareRequest, SubmitAssessmentRequest};
pub use scoring::{MatchCriterion, MatchEngine, MatchResult, MatchScore, ScoreComponent, ScoringConfig};
pub use service::{AssessmentOutcome, MatchmakerError, MatchmakerService};
