mod fields;
mod flow;

pub use fields::{scenario_fields, CompanionField, CompanionTrigger, FieldKind, FieldSpec};
pub use flow::{AssessmentFlow, StepInput, StepOutcome, ValidationError};
