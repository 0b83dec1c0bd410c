//! Affirmative Defenses template

use chrono::NaiveDate;
use shared_types::AnalysisResult;

use super::{caption, signature};
use crate::format_date;

pub fn render(result: &AnalysisResult, case_number: &str, today: NaiveDate) -> String {
    let mut doc = caption(result, case_number);

    doc.push_str("\nAFFIRMATIVE DEFENSES\n\n");
    doc.push_str(&format!(
        "Defendant, {}, asserts the following affirmative defenses to the complaint filed \
         by {}:\n\n",
        result.defendant, result.plaintiff,
    ));

    for (index, defense) in result.affirmative_defenses.iter().enumerate() {
        doc.push_str(&format!(
            "{}. {}: Defendant asserts the defense of {}.\n",
            index + 1,
            defense.to_uppercase(),
            defense.to_lowercase(),
        ));
    }

    doc.push_str(
        "\nDefendant reserves the right to assert additional defenses as discovery \
         proceeds.\n\n",
    );

    doc.push_str(&signature(result, &format_date(today)));
    doc
}
