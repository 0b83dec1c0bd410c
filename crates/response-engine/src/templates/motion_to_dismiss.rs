//! Motion to Dismiss template
//!
//! Only a hardcoded subset of states gets a state-specific statute citation
//! in the failure-to-state-a-claim ground; everyone else receives the
//! generic clause. Known coverage gap, not a bug.

use chrono::NaiveDate;
use shared_types::AnalysisResult;

use super::{caption, signature};
use crate::format_date;

pub fn render(result: &AnalysisResult, case_number: &str, today: NaiveDate) -> String {
    let mut doc = caption(result, case_number);

    doc.push_str("\nMOTION TO DISMISS\n\n");
    doc.push_str(&format!(
        "Defendant, {}, moves this Court for an order dismissing the complaint filed by {}, \
         and in support states:\n\n",
        result.defendant, result.plaintiff,
    ));

    doc.push_str(
        "1. Plaintiff has failed to establish ownership of the alleged debt, and the \
         complaint should be dismissed for lack of standing.\n",
    );
    doc.push_str("2. The action appears to be barred by the applicable statute of limitations.\n");
    doc.push_str(&format!(
        "3. The complaint fails to state a claim upon which relief can be granted{}.\n\n",
        state_citation(&result.state),
    ));

    doc.push_str(
        "WHEREFORE, Defendant respectfully requests that the Court dismiss the complaint \
         with prejudice and award Defendant costs.\n\n",
    );

    doc.push_str(&signature(result, &format_date(today)));
    doc
}

fn state_citation(state: &str) -> &'static str {
    match state {
        "California" => " pursuant to California Code of Civil Procedure section 430.10(e)",
        "Florida" => " pursuant to Fla. R. Civ. P. 1.140(b)(6)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_california_gets_specific_citation() {
        assert!(state_citation("California").contains("430.10(e)"));
    }

    #[test]
    fn test_other_states_get_generic_clause() {
        assert_eq!(state_citation("Texas"), "");
        assert_eq!(state_citation("Wyoming"), "");
    }
}
