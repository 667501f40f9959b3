//! Static field sequences for the two assessment scenarios.
//!
//! Each scenario is a fixed, ordered list of question specs. The flow
//! controller walks these; the fields endpoint serializes them for clients
//! that render the wizard.

use std::fmt;

use serde::Serialize;

use super::super::domain::{AnswerValue, QuestionKey, Scenario};

/// Input widget category. Determines which answer shape a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    MultiSelect,
    MultiSelectButtons,
    CheckboxGroup,
    Ranking,
    Dropdown,
    Slider,
    Toggle,
    Text,
}

impl FieldKind {
    pub const fn tag(self) -> &'static str {
        match self {
            FieldKind::MultiSelect => "multi-select",
            FieldKind::MultiSelectButtons => "multi-select-buttons",
            FieldKind::CheckboxGroup => "checkbox-group",
            FieldKind::Ranking => "ranking",
            FieldKind::Dropdown => "dropdown",
            FieldKind::Slider => "slider",
            FieldKind::Toggle => "toggle",
            FieldKind::Text => "text",
        }
    }

    /// Whether an answer payload has the shape this widget collects. List
    /// widgets take string sets, single-choice widgets and free text take
    /// strings, toggles take booleans.
    pub fn accepts(self, value: &AnswerValue) -> bool {
        match self {
            FieldKind::MultiSelect
            | FieldKind::MultiSelectButtons
            | FieldKind::CheckboxGroup
            | FieldKind::Ranking => matches!(value, AnswerValue::List(_)),
            FieldKind::Dropdown | FieldKind::Slider | FieldKind::Text => {
                matches!(value, AnswerValue::Text(_))
            }
            FieldKind::Toggle => matches!(value, AnswerValue::Toggle(_)),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Condition under which a companion free-text input is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "when", content = "choice", rename_all = "kebab-case")]
pub enum CompanionTrigger {
    /// Single-choice answer equals the given option.
    ChoiceIs(&'static str),
    /// List answer contains the given option.
    IncludesChoice(&'static str),
    /// Toggle answer is off.
    ToggledOff,
}

impl CompanionTrigger {
    pub fn fires(&self, value: &AnswerValue) -> bool {
        match self {
            CompanionTrigger::ChoiceIs(choice) => {
                value.as_text().map_or(false, |text| text == *choice)
            }
            CompanionTrigger::IncludesChoice(choice) => value
                .as_list()
                .map_or(false, |items| items.iter().any(|item| item == choice)),
            CompanionTrigger::ToggledOff => value.as_toggle() == Some(false),
        }
    }
}

/// Secondary free-text input captured alongside its primary field when the
/// trigger condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanionField {
    pub key: QuestionKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'static str>,
    pub placeholder: &'static str,
    pub trigger: CompanionTrigger,
}

/// One wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: QuestionKey,
    pub label: &'static str,
    pub kind: FieldKind,
    pub options: &'static [&'static str],
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion: Option<CompanionField>,
}

pub const fn scenario_fields(scenario: Scenario) -> &'static [FieldSpec] {
    match scenario {
        Scenario::NonCompeting => NON_COMPETING_FIELDS,
        Scenario::Benchmark => BENCHMARK_FIELDS,
    }
}

const GEOGRAPHY_OPTIONS: &[&str] = &[
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East & Africa",
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Australia",
    "Japan",
    "India",
    "Brazil",
    "Mexico",
];

const SEGMENT_OPTIONS: &[&str] = &[
    "SMB (Small & Medium Business)",
    "Enterprise",
    "Mid-Market",
    "Startups",
    "Government",
    "Non-Profit",
    "Education",
];

const PARTNER_TYPE_OPTIONS: &[&str] = &[
    "Reseller",
    "System Integrator (SI)",
    "Independent Software Vendor (ISV)",
    "Technology Partner",
    "Channel Partner",
    "Solution Provider",
    "Consulting Partner",
    "Referral Partner",
];

const INCENTIVE_OPTIONS: &[&str] = &["0-10%", "10-20%", "20-30%", "30-40%", "40%+"];

const COMPLIANCE_OPTIONS: &[&str] = &[
    "GDPR",
    "SOC2",
    "ISO 27001",
    "HIPAA",
    "PCI DSS",
    "FedRAMP",
    "CCPA",
    "SOX",
    "ITAR",
    "FISMA",
];

const TIMELINE_OPTIONS: &[&str] = &["0-3 months", "3-6 months", "6-12 months", "12+ months"];

const VENDOR_OPTIONS: &[&str] = &[
    "HubSpot",
    "Salesforce",
    "Microsoft",
    "Google",
    "Adobe",
    "Oracle",
    "SAP",
    "ServiceNow",
    "Workday",
    "Atlassian",
    "Slack",
    "Zoom",
    "Dropbox",
    "Box",
    "DocuSign",
    "Mailchimp",
    "Zendesk",
    "Intercom",
    "Stripe",
    "PayPal",
];

static NON_COMPETING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: QuestionKey::BusinessFocus,
        label: "What is your business's core focus or solution category?",
        kind: FieldKind::Dropdown,
        options: &[
            "CRM & Sales",
            "Marketing and Advertising",
            "AI and Machine Learning",
            "Business Intelligence & Analytics",
            "Cloud Solutions & Storage",
            "Customer Service & Support",
            "eCommerce",
            "Finance & Accounting",
            "Human Resources (HR)",
            "Project & Task Management",
            "Software Development",
            "Security & Identity Management",
            "Media & Design",
            "Specialized Software",
            "Other",
        ],
        required: true,
        placeholder: None,
        companion: Some(CompanionField {
            key: QuestionKey::BusinessFocusOther,
            prompt: None,
            placeholder: "Enter your focus/category...",
            trigger: CompanionTrigger::ChoiceIs("Other"),
        }),
    },
    FieldSpec {
        key: QuestionKey::ExistingPartners,
        label: "Which SaaS vendors are you already partnered with?",
        kind: FieldKind::MultiSelectButtons,
        options: &[
            "HubSpot",
            "Salesforce",
            "Microsoft",
            "Google",
            "Adobe",
            "Oracle",
            "SAP",
            "ServiceNow",
            "Workday",
            "Atlassian",
            "Slack",
            "Zoom",
            "Dropbox",
            "Box",
            "DocuSign",
            "Mailchimp",
            "Zendesk",
            "Intercom",
            "Stripe",
            "PayPal",
            "Other",
        ],
        required: true,
        placeholder: None,
        companion: Some(CompanionField {
            key: QuestionKey::ExistingPartnersOther,
            prompt: None,
            placeholder: "Add other vendors separated by commas",
            trigger: CompanionTrigger::IncludesChoice("Other"),
        }),
    },
    FieldSpec {
        key: QuestionKey::PartnerDuration,
        label: "How long have you been associated with the vendor?",
        kind: FieldKind::Slider,
        options: &["< 1 year", "1-3 years", "4-6 years", "< 6 years"],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::Geography,
        label: "Which geography/countries do you operate in?",
        kind: FieldKind::MultiSelectButtons,
        options: GEOGRAPHY_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::CustomerSegment,
        label: "What customer segment do you target?",
        kind: FieldKind::MultiSelectButtons,
        options: SEGMENT_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::AvoidCompetition,
        label: "Are you looking for similar solutions?",
        kind: FieldKind::Toggle,
        options: &[],
        required: false,
        placeholder: None,
        companion: Some(CompanionField {
            key: QuestionKey::NewCategoryIdea,
            prompt: Some("Which new category do you have in mind?"),
            placeholder: "Type the category you want to explore",
            trigger: CompanionTrigger::ToggledOff,
        }),
    },
    FieldSpec {
        key: QuestionKey::ExpansionGoal,
        label: "What is your expansion/partnership goal?",
        kind: FieldKind::Slider,
        options: &[
            "Market expansion",
            "Product integration",
            "Co-sell opportunities",
            "Channel development",
            "Technology partnership",
            "Strategic alliance",
            "Revenue growth",
            "Geographic expansion",
            "Other",
        ],
        required: true,
        placeholder: None,
        companion: Some(CompanionField {
            key: QuestionKey::ExpansionGoalOther,
            prompt: None,
            placeholder: "Describe your goal",
            trigger: CompanionTrigger::ChoiceIs("Other"),
        }),
    },
    FieldSpec {
        key: QuestionKey::PartnerType,
        label: "What type of partner program do you prefer (reseller, SI, etc.)?",
        kind: FieldKind::MultiSelect,
        options: PARTNER_TYPE_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::ExpectedIncentives,
        label: "What incentives/commissions/revenue share do you expect?",
        kind: FieldKind::Slider,
        options: INCENTIVE_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::SupportNeeds,
        label: "What support, training, or enablement do you need?",
        kind: FieldKind::CheckboxGroup,
        options: &[
            "Sales training",
            "Technical training",
            "Marketing support",
            "Co-marketing funds",
            "Lead generation",
            "Certification programs",
            "Dedicated support",
            "Partner portal access",
            "API documentation",
            "Integration support",
        ],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::TechnicalIntegration,
        label: "Any technical integration needs (API, compatibility)?",
        kind: FieldKind::Text,
        options: &[],
        required: false,
        placeholder: Some("Describe your technical requirements..."),
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::ComplianceRequirements,
        label: "Any must-have compliance requirements (GDPR, SOC2)?",
        kind: FieldKind::CheckboxGroup,
        options: COMPLIANCE_OPTIONS,
        required: false,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::Timeline,
        label: "What is your expected timeline for a new partnership?",
        kind: FieldKind::Slider,
        options: TIMELINE_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
];

static BENCHMARK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: QuestionKey::ExistingPartners,
        label: "Which SaaS vendors are you already partnered with?",
        kind: FieldKind::MultiSelect,
        options: VENDOR_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::PartnerStatus,
        label: "What is your partner status/level with each vendor?",
        kind: FieldKind::Slider,
        options: &["Bronze", "Silver", "Gold", "Platinum", "Diamond", "Elite"],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::Geography,
        label: "Which geography/countries do you operate in?",
        kind: FieldKind::MultiSelect,
        options: GEOGRAPHY_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::CustomerSegment,
        label: "What customer segment do you target?",
        kind: FieldKind::MultiSelectButtons,
        options: SEGMENT_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::SelectedVendor,
        label: "Have you already selected your next partner vendor? Which one?",
        kind: FieldKind::Slider,
        options: &[
            "Odoo",
            "HubSpot",
            "Salesforce",
            "Microsoft",
            "Google",
            "Adobe",
            "Oracle",
            "SAP",
            "ServiceNow",
            "Workday",
            "Atlassian",
            "Slack",
            "Zoom",
            "Dropbox",
            "Box",
            "DocuSign",
            "Mailchimp",
            "Zendesk",
            "Intercom",
            "Stripe",
            "PayPal",
        ],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::BenchmarkCompetitors,
        label: "Do you want to benchmark your selected vendor vs. direct competitors before signing?",
        kind: FieldKind::Toggle,
        options: &[],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::PartnerType,
        label: "What type of partner program do you prefer?",
        kind: FieldKind::MultiSelect,
        options: PARTNER_TYPE_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::ExpectedIncentives,
        label: "What incentives/commissions/revenue share do you expect?",
        kind: FieldKind::Slider,
        options: INCENTIVE_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::SpecificFeatures,
        label: "Which specific features/modules should the benchmark focus on?",
        kind: FieldKind::MultiSelect,
        options: &[
            "CRM",
            "Marketing Automation",
            "Project Management",
            "HR Management",
            "Accounting",
            "Inventory",
            "E-commerce",
            "Analytics",
            "Reporting",
            "API Integration",
            "Mobile App",
            "Custom Development",
        ],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::CommercialRequirements,
        label: "What commercial and operational requirements matter most?",
        kind: FieldKind::Ranking,
        options: &[
            "Pricing flexibility",
            "Contract terms",
            "Support quality",
            "Training availability",
            "Marketing support",
            "Technical resources",
            "Partner portal",
            "Certification process",
        ],
        required: true,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::ComplianceRequirements,
        label: "Any critical technical/compliance needs?",
        kind: FieldKind::CheckboxGroup,
        options: COMPLIANCE_OPTIONS,
        required: false,
        placeholder: None,
        companion: None,
    },
    FieldSpec {
        key: QuestionKey::Timeline,
        label: "Expected onboarding timeline",
        kind: FieldKind::Slider,
        options: TIMELINE_OPTIONS,
        required: true,
        placeholder: None,
        companion: None,
    },
];
