//! Static catalog of vendor partner programs.
//!
//! The engine scores against this fixed set; there is no persistence layer
//! behind it. Overlap checks are exact string equality, so the categorical
//! values here are the canonical spellings.

use super::domain::{MaturityTier, ProgramId, ProgramRecord, SupportLevel};

#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    programs: Vec<ProgramRecord>,
}

impl ProgramCatalog {
    /// The standard six-vendor catalog.
    pub fn standard() -> Self {
        Self {
            programs: standard_programs(),
        }
    }

    pub fn from_records(programs: Vec<ProgramRecord>) -> Self {
        Self { programs }
    }

    pub fn programs(&self) -> &[ProgramRecord] {
        &self.programs
    }

    pub fn find(&self, id: &str) -> Option<&ProgramRecord> {
        self.programs.iter().find(|program| program.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn standard_programs() -> Vec<ProgramRecord> {
    vec![
        ProgramRecord {
            id: ProgramId("hubspot-1"),
            vendor: "HubSpot",
            maturity: MaturityTier::Scaleup,
            health: 4,
            product_functionality: 4,
            customer_feedback: 5,
            employee_feedback: 4,
            market_presence: 5,
            adaptability: 4,
            summary: "HubSpot's partner program aligns perfectly with your SMB SaaS goals, offering comprehensive marketing automation tools and strong co-selling opportunities.",
            category: "CRM & Sales",
            partner_types: vec!["Reseller", "ISV", "Technology Partner"],
            geography: vec!["North America", "Europe", "Asia Pacific"],
            compliance: vec!["GDPR", "SOC2"],
            commission_model: "20-30%",
            onboarding_time: "3-6 months",
            support_level: SupportLevel::High,
        },
        ProgramRecord {
            id: ProgramId("salesforce-1"),
            vendor: "Salesforce",
            maturity: MaturityTier::Enterprise,
            health: 5,
            product_functionality: 5,
            customer_feedback: 4,
            employee_feedback: 4,
            market_presence: 5,
            adaptability: 3,
            summary: "Salesforce offers enterprise-grade CRM solutions with extensive partner ecosystem and strong market presence.",
            category: "CRM & Sales",
            partner_types: vec!["Reseller", "SI", "ISV"],
            geography: vec!["North America", "Europe", "Asia Pacific", "Latin America"],
            compliance: vec!["GDPR", "SOC2", "ISO 27001"],
            commission_model: "15-25%",
            onboarding_time: "6-12 months",
            support_level: SupportLevel::High,
        },
        ProgramRecord {
            id: ProgramId("microsoft-1"),
            vendor: "Microsoft",
            maturity: MaturityTier::Enterprise,
            health: 4,
            product_functionality: 4,
            customer_feedback: 4,
            employee_feedback: 4,
            market_presence: 5,
            adaptability: 4,
            summary: "Microsoft's partner program provides access to a comprehensive suite of business applications and cloud services.",
            category: "Communication & Collaboration",
            partner_types: vec!["Reseller", "SI", "Technology Partner"],
            geography: vec!["North America", "Europe", "Asia Pacific"],
            compliance: vec!["GDPR", "SOC2", "ISO 27001", "FedRAMP"],
            commission_model: "10-20%",
            onboarding_time: "3-6 months",
            support_level: SupportLevel::Medium,
        },
        ProgramRecord {
            id: ProgramId("slack-1"),
            vendor: "Slack",
            maturity: MaturityTier::Scaleup,
            health: 4,
            product_functionality: 4,
            customer_feedback: 5,
            employee_feedback: 4,
            market_presence: 4,
            adaptability: 4,
            summary: "Slack's partner program focuses on workplace communication and collaboration tools with strong integration capabilities.",
            category: "Communication & Collaboration",
            partner_types: vec!["Technology Partner", "ISV"],
            geography: vec!["North America", "Europe"],
            compliance: vec!["GDPR", "SOC2"],
            commission_model: "15-25%",
            onboarding_time: "0-3 months",
            support_level: SupportLevel::Medium,
        },
        ProgramRecord {
            id: ProgramId("zoom-1"),
            vendor: "Zoom",
            maturity: MaturityTier::Scaleup,
            health: 4,
            product_functionality: 4,
            customer_feedback: 4,
            employee_feedback: 3,
            market_presence: 4,
            adaptability: 4,
            summary: "Zoom's partner program offers video conferencing and communication solutions with growing market presence.",
            category: "Communication & Collaboration",
            partner_types: vec!["Reseller", "Technology Partner"],
            geography: vec!["North America", "Europe", "Asia Pacific"],
            compliance: vec!["GDPR", "SOC2"],
            commission_model: "10-20%",
            onboarding_time: "0-3 months",
            support_level: SupportLevel::Medium,
        },
        ProgramRecord {
            id: ProgramId("stripe-1"),
            vendor: "Stripe",
            maturity: MaturityTier::Scaleup,
            health: 4,
            product_functionality: 5,
            customer_feedback: 5,
            employee_feedback: 4,
            market_presence: 3,
            adaptability: 5,
            summary: "Stripe's partner program provides payment processing solutions with excellent developer experience and API integration.",
            category: "Finance & Accounting",
            partner_types: vec!["Technology Partner", "ISV"],
            geography: vec!["North America", "Europe"],
            compliance: vec!["PCI DSS", "SOC2"],
            commission_model: "5-15%",
            onboarding_time: "0-3 months",
            support_level: SupportLevel::High,
        },
    ]
}
