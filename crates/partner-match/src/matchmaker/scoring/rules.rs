use super::super::domain::{AssessmentAnswers, MaturityTier, ProgramRecord, QuestionKey};
use super::config::ScoringConfig;
use super::{MatchCriterion, ScoreComponent};

const ENTERPRISE_SEGMENT: &str = "Enterprise";
const FAST_START_WINDOW: &str = "0-3 months";

pub(crate) fn score_program(
    answers: &AssessmentAnswers,
    program: &ProgramRecord,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, f32) {
    let mut components = Vec::new();
    let mut score = config.base_score;

    if let Some(regions) = answers.list(QuestionKey::Geography) {
        if let Some(shared) = overlap(&program.geography, regions) {
            components.push(ScoreComponent {
                criterion: MatchCriterion::GeographyOverlap,
                bonus: config.geography_bonus,
                note: format!("operating regions shared: {}", shared.join(", ")),
            });
            score += config.geography_bonus;
        }
    }

    if let Some(types) = answers.list(QuestionKey::PartnerType) {
        if let Some(shared) = overlap(&program.partner_types, types) {
            components.push(ScoreComponent {
                criterion: MatchCriterion::PartnerTypeOverlap,
                bonus: config.partner_type_bonus,
                note: format!("partner model available: {}", shared.join(", ")),
            });
            score += config.partner_type_bonus;
        }
    }

    if let Some(requirements) = answers.list(QuestionKey::ComplianceRequirements) {
        if let Some(shared) = overlap(&program.compliance, requirements) {
            components.push(ScoreComponent {
                criterion: MatchCriterion::ComplianceOverlap,
                bonus: config.compliance_bonus,
                note: format!("certifications covered: {}", shared.join(", ")),
            });
            score += config.compliance_bonus;
        }
    }

    if let Some(focus) = answers.text(QuestionKey::BusinessFocus) {
        if !focus.is_empty()
            && program
                .category
                .to_lowercase()
                .contains(&focus.to_lowercase())
        {
            components.push(ScoreComponent {
                criterion: MatchCriterion::BusinessFocusAlignment,
                bonus: config.business_focus_bonus,
                note: format!("category '{}' matches focus '{focus}'", program.category),
            });
            score += config.business_focus_bonus;
        }
    }

    if let Some(segments) = answers.list(QuestionKey::CustomerSegment) {
        if segments.iter().any(|segment| segment == ENTERPRISE_SEGMENT)
            && program.maturity == MaturityTier::Enterprise
        {
            components.push(ScoreComponent {
                criterion: MatchCriterion::EnterpriseSegment,
                bonus: config.enterprise_bonus,
                note: "enterprise-stage program for an enterprise segment".to_string(),
            });
            score += config.enterprise_bonus;
        }
    }

    if let Some(timeline) = answers.text(QuestionKey::Timeline) {
        if timeline == FAST_START_WINDOW && program.onboarding_time == FAST_START_WINDOW {
            components.push(ScoreComponent {
                criterion: MatchCriterion::FastStartTimeline,
                bonus: config.fast_start_bonus,
                note: format!("onboarding fits the {FAST_START_WINDOW} window"),
            });
            score += config.fast_start_bonus;
        }
    }

    (components, score.min(1.0))
}

/// Shared members between a program attribute set and the submitted answer
/// list, in program order. None when nothing overlaps.
fn overlap(program_values: &[&'static str], answered: &[String]) -> Option<Vec<&'static str>> {
    let shared: Vec<&'static str> = program_values
        .iter()
        .copied()
        .filter(|value| answered.iter().any(|answer| answer == value))
        .collect();

    if shared.is_empty() {
        None
    } else {
        Some(shared)
    }
}
