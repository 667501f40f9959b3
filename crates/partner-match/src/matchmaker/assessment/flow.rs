use super::super::domain::{AnswerValue, AssessmentAnswers, QuestionKey, Scenario};
use super::fields::{scenario_fields, FieldKind, FieldSpec};

/// Linear wizard session: current step, accumulated answers, and the fixed
/// field sequence for one scenario.
///
/// Steps only move by one. `next` validates before merging, so a failed
/// transition leaves both the step and the answers untouched. Revisited
/// steps keep their earlier answer unless a new value is supplied.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    scenario: Scenario,
    fields: &'static [FieldSpec],
    step: usize,
    answers: AssessmentAnswers,
}

/// Caller-supplied input for one `next` transition.
#[derive(Debug, Clone, Default)]
pub struct StepInput {
    pub value: Option<AnswerValue>,
    pub companion: Option<String>,
}

impl StepInput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn value(value: AnswerValue) -> Self {
        Self {
            value: Some(value),
            companion: None,
        }
    }

    pub fn with_companion(value: AnswerValue, companion: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            companion: Some(companion.into()),
        }
    }
}

/// Result of a successful `next` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced { step: usize },
    /// The last step validated; the accumulated answers are ready to submit.
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{field}' is required")]
    MissingRequired { field: QuestionKey },
    #[error("'{field}' expects a {expected} answer")]
    IncompatibleValue { field: QuestionKey, expected: FieldKind },
}

impl AssessmentFlow {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            fields: scenario_fields(scenario),
            step: 0,
            answers: AssessmentAnswers::new(),
        }
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.fields.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.fields.len()
    }

    pub fn current_field(&self) -> &'static FieldSpec {
        &self.fields[self.step]
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    pub fn into_answers(self) -> AssessmentAnswers {
        self.answers
    }

    /// Validate the current step and move forward.
    ///
    /// A supplied value must match the field's widget shape. Required
    /// fields must end up with a non-empty answer, counting an answer
    /// retained from an earlier visit when no new value is supplied. On
    /// success the value (and a triggered companion) merge into the
    /// accumulated answers and the flow advances, or reports `Completed`
    /// from the last step.
    pub fn next(&mut self, input: StepInput) -> Result<StepOutcome, ValidationError> {
        let field = *self.current_field();

        if let Some(value) = &input.value {
            if !field.kind.accepts(value) {
                return Err(ValidationError::IncompatibleValue {
                    field: field.key,
                    expected: field.kind,
                });
            }
        }

        let effective = input
            .value
            .clone()
            .or_else(|| self.answers.get(field.key).cloned());

        if field.required {
            let missing = effective.as_ref().map_or(true, AnswerValue::is_empty);
            if missing {
                return Err(ValidationError::MissingRequired { field: field.key });
            }
        }

        if let Some(value) = input.value {
            self.answers.insert(field.key, value);
        }

        if let (Some(companion), Some(value)) = (&field.companion, &effective) {
            if companion.trigger.fires(value) {
                if let Some(text) = input.companion {
                    if !text.is_empty() {
                        self.answers.insert(companion.key, AnswerValue::Text(text));
                    }
                }
            }
        }

        if self.step + 1 < self.fields.len() {
            self.step += 1;
            Ok(StepOutcome::Advanced { step: self.step })
        } else {
            Ok(StepOutcome::Completed)
        }
    }

    /// Move back one step, stopping at the first. Never validates.
    pub fn previous(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }
}
