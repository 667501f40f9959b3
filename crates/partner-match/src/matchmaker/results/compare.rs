use serde::Serialize;

use super::super::catalog::ProgramCatalog;
use super::super::domain::ProgramRecord;

/// Ordered set of programs picked for side-by-side comparison.
///
/// Toggling an already-selected id removes it; otherwise the id is
/// appended, so the comparison columns come out in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(index) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(index);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Comparison only opens once two or more programs are picked.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= 2
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// The shared attributes every comparison covers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonAttribute {
    Maturity,
    CommissionModel,
    OnboardingTime,
    SupportLevel,
    PartnerTypes,
    Geography,
    Compliance,
}

impl ComparisonAttribute {
    pub const fn ordered() -> [ComparisonAttribute; 7] {
        [
            ComparisonAttribute::Maturity,
            ComparisonAttribute::CommissionModel,
            ComparisonAttribute::OnboardingTime,
            ComparisonAttribute::SupportLevel,
            ComparisonAttribute::PartnerTypes,
            ComparisonAttribute::Geography,
            ComparisonAttribute::Compliance,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ComparisonAttribute::Maturity => "Maturity",
            ComparisonAttribute::CommissionModel => "Commission Model",
            ComparisonAttribute::OnboardingTime => "Onboarding Time",
            ComparisonAttribute::SupportLevel => "Support Level",
            ComparisonAttribute::PartnerTypes => "Partner Types",
            ComparisonAttribute::Geography => "Available Regions",
            ComparisonAttribute::Compliance => "Compliance",
        }
    }
}

/// Cell payload: scalar attributes carry one string, set attributes carry
/// the full list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    Single(String),
    Many(Vec<String>),
}

/// Column header describing one compared program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub id: String,
    pub vendor: String,
    pub category: String,
    pub health: u8,
    pub market_presence: u8,
}

/// One attribute row across all compared programs. Values align with the
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub attribute: ComparisonAttribute,
    pub label: &'static str,
    pub values: Vec<ComparisonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("select at least two programs to compare, got {selected}")]
    NotEnoughSelections { selected: usize },
    #[error("no partner program with id '{0}'")]
    UnknownProgram(String),
}

/// Build the side-by-side table for the picked ids, keeping pick order.
pub fn build_table(ids: &[String], catalog: &ProgramCatalog) -> Result<ComparisonTable, CompareError> {
    if ids.len() < 2 {
        return Err(CompareError::NotEnoughSelections {
            selected: ids.len(),
        });
    }

    let mut programs = Vec::with_capacity(ids.len());
    for id in ids {
        let program = catalog
            .find(id)
            .ok_or_else(|| CompareError::UnknownProgram(id.clone()))?;
        programs.push(program);
    }

    let columns = programs
        .iter()
        .map(|program| ComparisonColumn {
            id: program.id.as_str().to_string(),
            vendor: program.vendor.to_string(),
            category: program.category.to_string(),
            health: program.health,
            market_presence: program.market_presence,
        })
        .collect();

    let rows = ComparisonAttribute::ordered()
        .into_iter()
        .map(|attribute| ComparisonRow {
            attribute,
            label: attribute.label(),
            values: programs
                .iter()
                .map(|program| attribute_value(program, attribute))
                .collect(),
        })
        .collect();

    Ok(ComparisonTable { columns, rows })
}

fn attribute_value(program: &ProgramRecord, attribute: ComparisonAttribute) -> ComparisonValue {
    let many = |values: &[&'static str]| {
        ComparisonValue::Many(values.iter().map(|value| value.to_string()).collect())
    };

    match attribute {
        ComparisonAttribute::Maturity => {
            ComparisonValue::Single(program.maturity.label().to_string())
        }
        ComparisonAttribute::CommissionModel => {
            ComparisonValue::Single(program.commission_model.to_string())
        }
        ComparisonAttribute::OnboardingTime => {
            ComparisonValue::Single(program.onboarding_time.to_string())
        }
        ComparisonAttribute::SupportLevel => {
            ComparisonValue::Single(program.support_level.label().to_string())
        }
        ComparisonAttribute::PartnerTypes => many(&program.partner_types),
        ComparisonAttribute::Geography => many(&program.geography),
        ComparisonAttribute::Compliance => many(&program.compliance),
    }
}
