use super::common::*;
use crate::matchmaker::assessment::{AssessmentFlow, StepInput, StepOutcome, ValidationError};
use crate::matchmaker::domain::{AnswerValue, QuestionKey, Scenario};

fn advance(flow: &mut AssessmentFlow, value: AnswerValue) -> StepOutcome {
    let key = flow.current_field().key;
    flow.next(StepInput::value(value))
        .unwrap_or_else(|error| panic!("step '{key}' should advance: {error}"))
}

/// Valid answers for every non-competing step, in field order.
fn walk_non_competing(flow: &mut AssessmentFlow) -> StepOutcome {
    advance(flow, text("CRM & Sales"));
    advance(flow, list(&["HubSpot", "Stripe"]));
    advance(flow, text("1-3 years"));
    advance(flow, list(&["North America"]));
    advance(flow, list(&["SMB (Small & Medium Business)"]));
    advance(flow, AnswerValue::Toggle(true));
    advance(flow, text("Market expansion"));
    advance(flow, list(&["Technology Partner"]));
    advance(flow, text("10-20%"));
    advance(flow, list(&["Sales training"]));
    advance(flow, text("REST API access"));
    let outcome = advance(flow, list(&["GDPR"]));
    assert!(matches!(outcome, StepOutcome::Advanced { .. }));
    advance(flow, text("0-3 months"))
}

#[test]
fn scenarios_expose_their_fixed_step_counts() {
    assert_eq!(AssessmentFlow::new(Scenario::NonCompeting).total_steps(), 13);
    assert_eq!(AssessmentFlow::new(Scenario::Benchmark).total_steps(), 12);
}

#[test]
fn missing_required_answer_blocks_the_step() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    let error = flow.next(StepInput::empty()).unwrap_err();

    assert_eq!(
        error,
        ValidationError::MissingRequired {
            field: QuestionKey::BusinessFocus
        }
    );
    assert_eq!(flow.step(), 0);
    assert!(flow.answers().is_empty());
}

#[test]
fn empty_text_counts_as_missing() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    let error = flow.next(StepInput::value(text(""))).unwrap_err();

    assert!(matches!(
        error,
        ValidationError::MissingRequired {
            field: QuestionKey::BusinessFocus
        }
    ));
    assert_eq!(flow.step(), 0);
}

#[test]
fn empty_list_counts_as_missing() {
    let mut flow = AssessmentFlow::new(Scenario::Benchmark);

    let error = flow.next(StepInput::value(list(&[]))).unwrap_err();

    assert!(matches!(
        error,
        ValidationError::MissingRequired {
            field: QuestionKey::ExistingPartners
        }
    ));
    assert_eq!(flow.step(), 0);
}

#[test]
fn mismatched_answer_shape_is_rejected() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    // The first step is a single-choice question.
    let error = flow
        .next(StepInput::value(list(&["CRM & Sales"])))
        .unwrap_err();

    assert!(matches!(
        error,
        ValidationError::IncompatibleValue {
            field: QuestionKey::BusinessFocus,
            ..
        }
    ));
    assert_eq!(flow.step(), 0);
    assert!(flow.answers().is_empty());
}

#[test]
fn numeric_answers_fit_no_field_kind() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    // Dropdown step.
    let error = flow
        .next(StepInput::value(AnswerValue::Number(4.0)))
        .unwrap_err();
    assert!(matches!(
        error,
        ValidationError::IncompatibleValue {
            field: QuestionKey::BusinessFocus,
            ..
        }
    ));
    assert_eq!(flow.step(), 0);
    assert!(flow.answers().is_empty());

    // Multi-select step.
    advance(&mut flow, text("CRM & Sales"));
    let error = flow
        .next(StepInput::value(AnswerValue::Number(2.0)))
        .unwrap_err();
    assert!(matches!(
        error,
        ValidationError::IncompatibleValue {
            field: QuestionKey::ExistingPartners,
            ..
        }
    ));

    // The toggle refuses the shape too, optional or not.
    advance(&mut flow, list(&["HubSpot"]));
    advance(&mut flow, text("1-3 years"));
    advance(&mut flow, list(&["Europe"]));
    advance(&mut flow, list(&["Enterprise"]));
    assert_eq!(flow.current_field().key, QuestionKey::AvoidCompetition);
    let error = flow
        .next(StepInput::value(AnswerValue::Number(1.0)))
        .unwrap_err();
    assert!(matches!(
        error,
        ValidationError::IncompatibleValue {
            field: QuestionKey::AvoidCompetition,
            ..
        }
    ));
    assert_eq!(flow.step(), 5);
    assert!(!flow.answers().contains(QuestionKey::AvoidCompetition));
}

#[test]
fn valid_answer_advances_exactly_one_step_and_merges() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    let outcome = flow
        .next(StepInput::value(text("eCommerce")))
        .expect("valid answer advances");

    assert_eq!(outcome, StepOutcome::Advanced { step: 1 });
    assert_eq!(flow.step(), 1);
    assert_eq!(flow.answers().text(QuestionKey::BusinessFocus), Some("eCommerce"));
}

#[test]
fn optional_step_advances_without_an_answer() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);
    advance(&mut flow, text("CRM & Sales"));
    advance(&mut flow, list(&["HubSpot"]));
    advance(&mut flow, text("1-3 years"));
    advance(&mut flow, list(&["Europe"]));
    advance(&mut flow, list(&["Enterprise"]));

    // The competition toggle is the only optional non-text step.
    assert_eq!(flow.current_field().key, QuestionKey::AvoidCompetition);
    let outcome = flow.next(StepInput::empty()).expect("optional step");

    assert_eq!(outcome, StepOutcome::Advanced { step: 6 });
    assert!(!flow.answers().contains(QuestionKey::AvoidCompetition));
}

#[test]
fn toggled_off_answer_passes_required_validation() {
    let mut flow = AssessmentFlow::new(Scenario::Benchmark);
    advance(&mut flow, list(&["HubSpot"]));
    advance(&mut flow, text("Gold"));
    advance(&mut flow, list(&["Europe"]));
    advance(&mut flow, list(&["Enterprise"]));
    advance(&mut flow, text("Odoo"));

    assert_eq!(flow.current_field().key, QuestionKey::BenchmarkCompetitors);
    assert!(flow.current_field().required);

    let outcome = flow
        .next(StepInput::value(AnswerValue::Toggle(false)))
        .expect("a false toggle is still an answer");

    assert_eq!(outcome, StepOutcome::Advanced { step: 6 });
    assert_eq!(
        flow.answers().toggle(QuestionKey::BenchmarkCompetitors),
        Some(false)
    );
}

#[test]
fn other_choice_captures_companion_text_in_the_same_transition() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    flow.next(StepInput::with_companion(text("Other"), "Quantum tooling"))
        .expect("advances");

    assert_eq!(flow.answers().text(QuestionKey::BusinessFocus), Some("Other"));
    assert_eq!(
        flow.answers().text(QuestionKey::BusinessFocusOther),
        Some("Quantum tooling")
    );
}

#[test]
fn companion_text_is_dropped_when_the_trigger_does_not_fire() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    flow.next(StepInput::with_companion(text("eCommerce"), "ignored"))
        .expect("advances");

    assert!(!flow.answers().contains(QuestionKey::BusinessFocusOther));
}

#[test]
fn declining_competition_captures_the_new_category_idea() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);
    advance(&mut flow, text("CRM & Sales"));
    advance(&mut flow, list(&["HubSpot"]));
    advance(&mut flow, text("1-3 years"));
    advance(&mut flow, list(&["Europe"]));
    advance(&mut flow, list(&["Enterprise"]));

    flow.next(StepInput::with_companion(
        AnswerValue::Toggle(false),
        "Field service management",
    ))
    .expect("toggle step advances");

    assert_eq!(
        flow.answers().text(QuestionKey::NewCategoryIdea),
        Some("Field service management")
    );
}

#[test]
fn previous_rewinds_one_step_and_floors_at_zero() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);
    assert_eq!(flow.previous(), 0);

    advance(&mut flow, text("CRM & Sales"));
    advance(&mut flow, list(&["HubSpot"]));
    assert_eq!(flow.step(), 2);

    assert_eq!(flow.previous(), 1);
    assert_eq!(flow.previous(), 0);
    assert_eq!(flow.previous(), 0);
}

#[test]
fn revisited_step_keeps_its_earlier_answer() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);
    advance(&mut flow, text("CRM & Sales"));
    flow.previous();

    // No new value supplied; the stored answer satisfies the requirement.
    let outcome = flow.next(StepInput::empty()).expect("stored answer counts");

    assert_eq!(outcome, StepOutcome::Advanced { step: 1 });
    assert_eq!(flow.answers().text(QuestionKey::BusinessFocus), Some("CRM & Sales"));
}

#[test]
fn full_walk_completes_on_the_last_step() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);

    let outcome = walk_non_competing(&mut flow);

    assert_eq!(outcome, StepOutcome::Completed);
    assert_eq!(flow.step(), 12);
    assert_eq!(flow.answers().len(), 13);

    // Repeating next on the finished flow reports completion again.
    let again = flow.next(StepInput::empty()).expect("still complete");
    assert_eq!(again, StepOutcome::Completed);
    assert_eq!(flow.step(), 12);
}

#[test]
fn completed_answers_feed_the_engine_directly() {
    let mut flow = AssessmentFlow::new(Scenario::NonCompeting);
    walk_non_competing(&mut flow);

    let engine = engine();
    let catalog = catalog();
    let results = engine.rank(flow.answers(), catalog.programs());

    assert!(!results.is_empty());
    for result in &results {
        assert!(result.score > 0.3);
    }
}
