//! Plain-text rendering of response documents and analysis reports
//!
//! Every renderer takes a read-only [`AnalysisResult`] and returns a string;
//! PDF/DOCX byte emission belongs to an external export service. Output is
//! deterministic given a fixed `today` and an injected case-number
//! generator.

pub mod casenum;
pub mod report;
pub mod templates;

use std::str::FromStr;

use chrono::NaiveDate;
use shared_types::AnalysisResult;
use thiserror::Error;

pub use casenum::{CaseNumberGenerator, FixedCaseNumber, RandomCaseNumbers};
pub use report::render_report;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown document template: {0}")]
    UnknownTemplate(String),
}

/// The response documents this engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Answer,
    MotionToDismiss,
    AffirmativeDefenses,
    JuryDemand,
}

impl DocumentKind {
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Answer => "Answer to Complaint",
            DocumentKind::MotionToDismiss => "Motion to Dismiss",
            DocumentKind::AffirmativeDefenses => "Affirmative Defenses",
            DocumentKind::JuryDemand => "Jury Demand Form",
        }
    }

    pub fn all() -> [DocumentKind; 4] {
        [
            DocumentKind::Answer,
            DocumentKind::MotionToDismiss,
            DocumentKind::AffirmativeDefenses,
            DocumentKind::JuryDemand,
        ]
    }
}

impl FromStr for DocumentKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "answer" | "answer-to-complaint" | "answer to complaint" => Ok(DocumentKind::Answer),
            "motion-to-dismiss" | "motion to dismiss" => Ok(DocumentKind::MotionToDismiss),
            "affirmative-defenses" | "affirmative defenses" => Ok(DocumentKind::AffirmativeDefenses),
            "jury-demand" | "jury demand" | "jury demand form" => Ok(DocumentKind::JuryDemand),
            _ => Err(RenderError::UnknownTemplate(s.to_string())),
        }
    }
}

/// Render one response document.
///
/// The case number comes from the injected generator; callers needing
/// reproducible output pass a [`FixedCaseNumber`].
pub fn render_document(
    kind: DocumentKind,
    result: &AnalysisResult,
    case_numbers: &mut dyn CaseNumberGenerator,
    today: NaiveDate,
) -> String {
    let case_number = case_numbers.next_case_number();
    match kind {
        DocumentKind::Answer => templates::answer::render(result, &case_number, today),
        DocumentKind::MotionToDismiss => {
            templates::motion_to_dismiss::render(result, &case_number, today)
        }
        DocumentKind::AffirmativeDefenses => {
            templates::affirmative_defenses::render(result, &case_number, today)
        }
        DocumentKind::JuryDemand => templates::jury_demand::render(result, &case_number, today),
    }
}

/// Dates render in the M/D/YYYY form used throughout the templates
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
