//! Human-readable analysis report
//!
//! Fixed section order; list-backed sections are omitted when their backing
//! list is empty. Every issue description and defense name from the result
//! appears verbatim.

use shared_types::AnalysisResult;

use crate::format_date;

const DISCLAIMER: &str = "DISCLAIMER: This analysis is for informational purposes only and does \
not constitute legal advice. Consult with a qualified attorney for specific legal guidance.";

pub fn render_report(result: &AnalysisResult) -> String {
    let mut report = String::from("DEBT LAWSUIT ANALYSIS REPORT\n\n");

    report.push_str(&format!("JURISDICTION: {}\n", result.court_information.name));
    report.push_str(&format!("CASE TYPE: {}\n", result.case_type.heading()));
    report.push_str(&format!(
        "URGENCY LEVEL: {}\n\n",
        result.urgency_level.label().to_uppercase()
    ));

    report.push_str("KEY FINDINGS:\n");
    report.push_str(&format!("1. Plaintiff: {}\n", result.plaintiff));
    report.push_str(&format!("2. Defendant: {}\n", result.defendant));
    report.push_str(&format!("3. Amount Claimed: {}\n", result.amount));
    report.push_str(&format!(
        "4. Service Date: {}\n",
        format_date(result.service_date)
    ));
    report.push_str(&format!(
        "5. Filing Deadline: {}\n\n",
        format_date(result.filing_deadline)
    ));

    if !result.legal_issues.is_empty() {
        report.push_str("LEGAL ISSUES IDENTIFIED:\n");
        for issue in &result.legal_issues {
            report.push_str(&format!(
                "- {} ({})\n",
                issue.description,
                issue.severity.label().to_uppercase()
            ));
        }
        report.push('\n');
    }

    if !result.recommended_defenses.is_empty() {
        report.push_str("RECOMMENDED DEFENSES:\n");
        for defense in &result.recommended_defenses {
            report.push_str(&format!(
                "- {}: {} (Success Rate: {}%)\n",
                defense.name,
                defense.description,
                (defense.success_rate * 100.0).round() as u32,
            ));
        }
        report.push('\n');
    }

    if !result.fdcpa_violations.is_empty() {
        report.push_str("FDCPA VIOLATIONS:\n");
        for violation in &result.fdcpa_violations {
            report.push_str(&format!(
                "- {}: {} (Damages: {})\n",
                violation.kind.label(),
                violation.description,
                violation.damages,
            ));
        }
        report.push('\n');
    }

    let sol = &result.statute_of_limitations;
    report.push_str("STATUTE OF LIMITATIONS:\n");
    report.push_str(&format!(
        "- Applicable: {}\n",
        if sol.applicable { "Yes" } else { "No" }
    ));
    report.push_str(&format!("- Time Limit: {}\n", sol.time_limit));
    report.push_str(&format!(
        "- Expired: {}\n\n",
        if sol.expired { "Yes" } else { "No" }
    ));

    let risk = &result.risk_assessment;
    report.push_str("RISK ASSESSMENT:\n");
    report.push_str(&format!(
        "- Overall Risk: {}\n",
        risk.overall_risk.label().to_uppercase()
    ));
    report.push_str(&format!("- Default Risk: {}%\n", risk.default_risk));
    report.push_str(&format!("- Judgment Risk: {}%\n", risk.judgment_risk));
    report.push_str(&format!(
        "- Wage Garnishment Risk: {}%\n",
        risk.wage_garnishment_risk
    ));
    report.push_str(&format!("- Bank Levy Risk: {}%\n\n", risk.bank_levy_risk));

    if !result.recommended_actions.is_empty() {
        report.push_str("RECOMMENDED ACTIONS:\n");
        for action in &result.recommended_actions {
            report.push_str(&format!("- {}\n", action));
        }
        report.push('\n');
    }

    let court = &result.court_information;
    report.push_str("COURT INFORMATION:\n");
    report.push_str(&format!("{}\n", court.name));
    report.push_str(&format!("{}\n", court.address));
    report.push_str(&format!("Phone: {}\n", court.phone));
    report.push_str(&format!("Website: {}\n\n", court.website));

    if !result.filing_instructions.is_empty() {
        report.push_str("FILING INSTRUCTIONS:\n");
        for instruction in &result.filing_instructions {
            report.push_str(&format!(
                "{}. {} - {} (Fee: {})\n",
                instruction.step, instruction.action, instruction.deadline, instruction.fee,
            ));
        }
        report.push('\n');
    }

    report.push_str(DISCLAIMER);
    report
}
