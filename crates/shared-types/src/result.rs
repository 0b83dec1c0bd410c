use chrono::NaiveDate;

use crate::analysis::{
    CourtInfo, Defense, FdcpaViolation, FilingInstruction, LegalIssue, ResponseStrategy,
    RiskAssessment, StatuteOfLimitations, UrgencyLevel,
};
use crate::case::CaseType;

/// Complete output of one analysis pipeline run.
///
/// Constructed in full by a single `analyze` call and immutable once
/// returned; renderers and persistence layers treat it as a read-only value.
/// List fields are empty vectors when nothing was found, never absent.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub document_type: String,
    pub case_type: CaseType,
    pub state: String,
    pub county: String,
    pub plaintiff: String,
    pub defendant: String,
    pub amount: String,
    pub service_date: NaiveDate,
    pub filing_deadline: NaiveDate,
    pub urgency_level: UrgencyLevel,

    // Legal analysis
    pub legal_issues: Vec<LegalIssue>,
    pub recommended_defenses: Vec<Defense>,
    pub statute_of_limitations: StatuteOfLimitations,
    pub fdcpa_violations: Vec<FdcpaViolation>,

    // Response strategy
    pub response_strategy: ResponseStrategy,
    pub filing_instructions: Vec<FilingInstruction>,
    pub court_information: CourtInfo,

    // Generated content
    pub generated_response: String,
    pub affirmative_defenses: Vec<String>,
    pub counterclaims: Vec<String>,

    // Risk
    pub risk_assessment: RiskAssessment,
    pub recommended_actions: Vec<String>,
}
