use chrono::NaiveDate;

/// Severity of a flagged legal issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// High and Critical issues anchor a defense strategy
    pub fn is_strong(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Category of a flagged legal issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Standing,
    StatuteOfLimitations,
    Fdcpa,
    Validation,
    Service,
    Jurisdiction,
    Other,
}

/// A potential problem with the plaintiff's case, flagged from document text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LegalIssue {
    pub kind: IssueKind,
    pub description: String,
    pub severity: Severity,
    pub evidence: Vec<String>,
}

/// A candidate affirmative defense from the fixed catalog.
///
/// `success_rate` is an illustrative placeholder constant, not a
/// statistically derived figure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Defense {
    #[serde(rename = "type")]
    pub name: String,
    pub description: String,
    pub success_rate: f64,
    pub requirements: Vec<String>,
    pub case_law: Vec<String>,
}

/// Kinds of Fair Debt Collection Practices Act violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FdcpaViolationKind {
    Harassment,
    FalseRepresentation,
    UnfairPractices,
    Validation,
    CeaseCommunication,
}

impl FdcpaViolationKind {
    pub fn label(&self) -> &'static str {
        match self {
            FdcpaViolationKind::Harassment => "harassment",
            FdcpaViolationKind::FalseRepresentation => "false_representation",
            FdcpaViolationKind::UnfairPractices => "unfair_practices",
            FdcpaViolationKind::Validation => "validation",
            FdcpaViolationKind::CeaseCommunication => "cease_communication",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FdcpaViolation {
    pub kind: FdcpaViolationKind,
    pub description: String,
    pub damages: String,
    pub evidence: Vec<String>,
}

/// Statute-of-limitations determination for the claimed debt
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatuteOfLimitations {
    pub applicable: bool,
    pub time_limit: String,
    pub start_date: NaiveDate,
    pub expired: bool,
    pub exceptions: Vec<String>,
}

/// Overall exposure bucket from the risk decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Coarse exposure assessment.
///
/// The percentages are fixed illustrative constants keyed to the risk
/// bucket; they carry no statistical backing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub default_risk: u8,
    pub judgment_risk: u8,
    pub wage_garnishment_risk: u8,
    pub bank_levy_risk: u8,
    pub factors: Vec<String>,
}

/// How soon the defendant must act, stepped off the filing deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }
}

/// Recommended course of action given the defense picture
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResponseStrategy {
    pub primary: String,
    pub secondary: Vec<String>,
    pub timeline: String,
    pub estimated_cost: String,
}

/// One step of the court filing checklist
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilingInstruction {
    pub step: u8,
    pub action: String,
    pub deadline: String,
    pub form: String,
    pub fee: String,
}

/// Contact block for the court handling the case
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourtInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub filing_methods: Vec<String>,
}
