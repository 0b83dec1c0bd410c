//! One template module per response document

pub mod affirmative_defenses;
pub mod answer;
pub mod jury_demand;
pub mod motion_to_dismiss;

use shared_types::AnalysisResult;

/// Court caption shared by every document
pub(crate) fn caption(result: &AnalysisResult, case_number: &str) -> String {
    format!(
        "IN THE {} COUNTY COURT\n{}\n\n{}, Defendant\n\nCase No. {}\n",
        result.county.to_uppercase(),
        result.state.to_uppercase(),
        result.defendant.to_uppercase(),
        case_number,
    )
}

/// Signature block shared by every document
pub(crate) fn signature(result: &AnalysisResult, date_line: &str) -> String {
    format!(
        "Dated: {}\n\nRespectfully submitted,\n{}\nDefendant, Pro Se",
        date_line, result.defendant,
    )
}
