//! Answer to Complaint template

use chrono::NaiveDate;
use shared_types::AnalysisResult;

use super::{caption, signature};
use crate::format_date;

pub fn render(result: &AnalysisResult, case_number: &str, today: NaiveDate) -> String {
    let mut doc = caption(result, case_number);

    doc.push_str("\nANSWER TO COMPLAINT\n\n");
    doc.push_str(&format!(
        "Defendant, {}, hereby answers the complaint filed by {} as follows:\n\n",
        result.defendant, result.plaintiff,
    ));

    doc.push_str("GENERAL DENIAL\n");
    doc.push_str(
        "1. Defendant denies each and every allegation in the complaint not specifically \
         admitted herein.\n\n",
    );

    doc.push_str("AFFIRMATIVE DEFENSES\n");
    for (index, defense) in result.affirmative_defenses.iter().enumerate() {
        doc.push_str(&format!(
            "{}. {}: Defendant asserts the defense of {}.\n",
            index + 1,
            defense.to_uppercase(),
            defense.to_lowercase(),
        ));
    }

    if !result.counterclaims.is_empty() {
        doc.push_str("\nCOUNTERCLAIMS\n");
        for (index, claim) in result.counterclaims.iter().enumerate() {
            doc.push_str(&format!(
                "{}. {}: Defendant seeks damages for {}.\n",
                index + 1,
                claim,
                claim.to_lowercase(),
            ));
        }
    }

    doc.push_str("\nWHEREFORE, Defendant prays that:\n");
    doc.push_str("1. The complaint be dismissed with prejudice;\n");
    doc.push_str("2. Defendant be awarded costs and attorney fees;\n");
    doc.push_str("3. Such other relief as the court deems just and proper.\n\n");

    doc.push_str(&signature(result, &format_date(today)));
    doc
}
