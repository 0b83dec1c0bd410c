//! Jury Demand Form template

use chrono::NaiveDate;
use shared_types::AnalysisResult;

use super::{caption, signature};
use crate::format_date;

pub fn render(result: &AnalysisResult, case_number: &str, today: NaiveDate) -> String {
    let mut doc = caption(result, case_number);

    doc.push_str("\nDEMAND FOR JURY TRIAL\n\n");
    doc.push_str(&format!(
        "Defendant, {}, hereby demands a trial by jury on all issues so triable in the \
         above-captioned action.\n\n",
        result.defendant,
    ));

    doc.push_str(&signature(result, &format_date(today)));
    doc
}
