use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProgramId(pub &'static str);

impl ProgramId {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The two fixed assessment variants, each selecting a distinct ordered
/// question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    NonCompeting,
    Benchmark,
}

impl Scenario {
    pub const fn ordered() -> [Scenario; 2] {
        [Scenario::NonCompeting, Scenario::Benchmark]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Scenario::NonCompeting => "non-competing",
            Scenario::Benchmark => "benchmark",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Scenario::NonCompeting => "Non-Competing Partnerships",
            Scenario::Benchmark => "Vendor Benchmark",
        }
    }
}

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "non-competing" | "non_competing" => Ok(Scenario::NonCompeting),
            "benchmark" => Ok(Scenario::Benchmark),
            _ => Err(ScenarioParseError {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scenario '{value}', expected 'non-competing' or 'benchmark'")]
pub struct ScenarioParseError {
    pub value: String,
}

/// Ordinal maturity of a vendor's partner program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityTier {
    Startup,
    Scaleup,
    Enterprise,
}

impl MaturityTier {
    pub const fn rank(self) -> u8 {
        match self {
            MaturityTier::Startup => 1,
            MaturityTier::Scaleup => 2,
            MaturityTier::Enterprise => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaturityTier::Startup => "Startup",
            MaturityTier::Scaleup => "Scaleup",
            MaturityTier::Enterprise => "Enterprise",
        }
    }
}

/// Level of vendor-side enablement a program advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportLevel {
    High,
    Medium,
    Low,
}

impl SupportLevel {
    pub const fn label(self) -> &'static str {
        match self {
            SupportLevel::High => "High",
            SupportLevel::Medium => "Medium",
            SupportLevel::Low => "Low",
        }
    }
}

/// A vendor partner program as advertised in the static catalog.
///
/// Ratings are 1-5; the categorical sets hold the exact strings the wizard
/// options use, so membership checks are plain string equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramRecord {
    pub id: ProgramId,
    pub vendor: &'static str,
    pub maturity: MaturityTier,
    pub health: u8,
    pub product_functionality: u8,
    pub customer_feedback: u8,
    pub employee_feedback: u8,
    pub market_presence: u8,
    pub adaptability: u8,
    pub summary: &'static str,
    pub category: &'static str,
    pub partner_types: Vec<&'static str>,
    pub geography: Vec<&'static str>,
    pub compliance: Vec<&'static str>,
    pub commission_model: &'static str,
    pub onboarding_time: &'static str,
    pub support_level: SupportLevel,
}

/// Closed set of wizard answer keys shared by both scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    BusinessFocus,
    BusinessFocusOther,
    ExistingPartners,
    ExistingPartnersOther,
    PartnerDuration,
    PartnerStatus,
    Geography,
    CustomerSegment,
    AvoidCompetition,
    NewCategoryIdea,
    ExpansionGoal,
    ExpansionGoalOther,
    SelectedVendor,
    BenchmarkCompetitors,
    PartnerType,
    ExpectedIncentives,
    SupportNeeds,
    SpecificFeatures,
    CommercialRequirements,
    TechnicalIntegration,
    ComplianceRequirements,
    Timeline,
}

impl QuestionKey {
    /// Wire name, identical to the serde snake_case rename.
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionKey::BusinessFocus => "business_focus",
            QuestionKey::BusinessFocusOther => "business_focus_other",
            QuestionKey::ExistingPartners => "existing_partners",
            QuestionKey::ExistingPartnersOther => "existing_partners_other",
            QuestionKey::PartnerDuration => "partner_duration",
            QuestionKey::PartnerStatus => "partner_status",
            QuestionKey::Geography => "geography",
            QuestionKey::CustomerSegment => "customer_segment",
            QuestionKey::AvoidCompetition => "avoid_competition",
            QuestionKey::NewCategoryIdea => "new_category_idea",
            QuestionKey::ExpansionGoal => "expansion_goal",
            QuestionKey::ExpansionGoalOther => "expansion_goal_other",
            QuestionKey::SelectedVendor => "selected_vendor",
            QuestionKey::BenchmarkCompetitors => "benchmark_competitors",
            QuestionKey::PartnerType => "partner_type",
            QuestionKey::ExpectedIncentives => "expected_incentives",
            QuestionKey::SupportNeeds => "support_needs",
            QuestionKey::SpecificFeatures => "specific_features",
            QuestionKey::CommercialRequirements => "commercial_requirements",
            QuestionKey::TechnicalIntegration => "technical_integration",
            QuestionKey::ComplianceRequirements => "compliance_requirements",
            QuestionKey::Timeline => "timeline",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wizard answer payloads in the shapes the field kinds collect.
///
/// Untagged so request bodies carry plain JSON strings, arrays, booleans,
/// and numbers rather than enum envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Toggle(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// An answer counts as empty when it carries no usable content. Toggles
    /// and numbers are never empty; presence is what required checks see.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.is_empty(),
            AnswerValue::List(items) => items.is_empty(),
            AnswerValue::Toggle(_) | AnswerValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            AnswerValue::Toggle(flag) => Some(*flag),
            _ => None,
        }
    }
}

/// Accumulated wizard answers keyed by question.
///
/// Absent keys are simply absent; scoring treats them as failed conditions
/// rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentAnswers(BTreeMap<QuestionKey, AnswerValue>);

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: QuestionKey, value: AnswerValue) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn text(&self, key: QuestionKey) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    pub fn list(&self, key: QuestionKey) -> Option<&[String]> {
        self.get(key).and_then(AnswerValue::as_list)
    }

    pub fn toggle(&self, key: QuestionKey) -> Option<bool> {
        self.get(key).and_then(AnswerValue::as_toggle)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, &AnswerValue)> {
        self.0.iter()
    }
}
