use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::matchmaker::catalog::ProgramCatalog;
use crate::matchmaker::domain::{
    AnswerValue, AssessmentAnswers, MaturityTier, ProgramId, ProgramRecord, QuestionKey,
    SupportLevel,
};
use crate::matchmaker::scoring::{MatchEngine, ScoringConfig};
use crate::matchmaker::{matchmaker_router, MatchmakerService};

pub(super) fn text(value: &str) -> AnswerValue {
    AnswerValue::Text(value.to_string())
}

pub(super) fn list(values: &[&str]) -> AnswerValue {
    AnswerValue::List(values.iter().map(|value| value.to_string()).collect())
}

pub(super) fn engine() -> MatchEngine {
    MatchEngine::new(ScoringConfig::default())
}

pub(super) fn catalog() -> ProgramCatalog {
    ProgramCatalog::standard()
}

pub(super) fn build_service() -> MatchmakerService {
    MatchmakerService::new(ProgramCatalog::standard(), ScoringConfig::default())
}

pub(super) fn matchmaker_router_with_service(service: MatchmakerService) -> axum::Router {
    matchmaker_router(Arc::new(service))
}

/// Answers matching the payments program on four criteria: shared region,
/// shared partner model, category alignment, and a fast-start timeline.
pub(super) fn strong_answers() -> AssessmentAnswers {
    let mut answers = AssessmentAnswers::new();
    answers.insert(QuestionKey::Geography, list(&["North America"]));
    answers.insert(QuestionKey::PartnerType, list(&["Technology Partner"]));
    answers.insert(QuestionKey::BusinessFocus, text("Finance & Accounting"));
    answers.insert(QuestionKey::Timeline, text("0-3 months"));
    answers
}

/// A record engineered to satisfy all six criteria at once against
/// `all_criteria_answers`, pushing the raw sum past 1.0.
pub(super) fn all_criteria_record() -> ProgramRecord {
    ProgramRecord {
        id: ProgramId("acme-1"),
        vendor: "Acme",
        maturity: MaturityTier::Enterprise,
        health: 5,
        product_functionality: 5,
        customer_feedback: 5,
        employee_feedback: 5,
        market_presence: 5,
        adaptability: 5,
        summary: "Full-suite vendor with a partner desk on every continent.",
        category: "CRM & Sales",
        partner_types: vec!["Reseller", "Technology Partner"],
        geography: vec!["North America", "Europe"],
        compliance: vec!["GDPR", "SOC2"],
        commission_model: "20-30%",
        onboarding_time: "0-3 months",
        support_level: SupportLevel::High,
    }
}

pub(super) fn all_criteria_answers() -> AssessmentAnswers {
    let mut answers = AssessmentAnswers::new();
    answers.insert(QuestionKey::Geography, list(&["Europe"]));
    answers.insert(QuestionKey::PartnerType, list(&["Reseller"]));
    answers.insert(QuestionKey::ComplianceRequirements, list(&["GDPR"]));
    answers.insert(QuestionKey::BusinessFocus, text("CRM & Sales"));
    answers.insert(
        QuestionKey::CustomerSegment,
        list(&["Enterprise", "Mid-Market"]),
    );
    answers.insert(QuestionKey::Timeline, text("0-3 months"));
    answers
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 16)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
