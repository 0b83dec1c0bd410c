pub mod analysis;
pub mod case;
pub mod result;

pub use analysis::{
    CourtInfo, Defense, FdcpaViolation, FdcpaViolationKind, FilingInstruction, IssueKind,
    LegalIssue, ResponseStrategy, RiskAssessment, RiskLevel, Severity, StatuteOfLimitations,
    UrgencyLevel,
};
pub use case::{CaseType, ExtractedFields, AMOUNT_NOT_SPECIFIED, UNKNOWN_DEFENDANT, UNKNOWN_PLAINTIFF};
pub use result::AnalysisResult;
