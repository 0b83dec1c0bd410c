//! Rule-driven analysis pipeline for debt-collection lawsuit documents
//!
//! One `analyze` call runs the full pipeline over raw complaint text:
//! classification, field extraction, jurisdiction resolution, issue and
//! defense inference, FDCPA detection, deadline and statute arithmetic,
//! risk scoring, and response generation. The pipeline is deterministic
//! given a fixed `today` and case-number generator; nothing here reads the
//! system clock.

pub mod classifier;
pub mod court;
pub mod deadlines;
pub mod defenses;
pub mod extract;
pub mod fdcpa;
pub mod issues;
pub mod jurisdiction;
pub mod risk;

use chrono::NaiveDate;
use response_engine::{render_document, CaseNumberGenerator, DocumentKind, RandomCaseNumbers};
use shared_types::AnalysisResult;

pub use jurisdiction::{JurisdictionRules, JurisdictionTable, ResolvedRules};

/// Document-type label applied to every analyzed complaint
pub const DOCUMENT_TYPE: &str = "Civil Complaint - Debt Collection";

/// The analysis pipeline, parameterized by a jurisdiction rule table.
///
/// The table is injected at construction and never mutated; `Default`
/// wires in [`JurisdictionTable::standard`].
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    table: JurisdictionTable,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(JurisdictionTable::standard())
    }
}

impl AnalysisEngine {
    pub fn new(table: JurisdictionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &JurisdictionTable {
        &self.table
    }

    /// Run the full pipeline with a random case number on the generated
    /// answer document.
    pub fn analyze(
        &self,
        text: &str,
        state: &str,
        county: &str,
        today: NaiveDate,
    ) -> AnalysisResult {
        let mut case_numbers = RandomCaseNumbers;
        self.analyze_with(text, state, county, today, &mut case_numbers)
    }

    /// Run the full pipeline with an injected case-number generator.
    ///
    /// With a fixed generator and a fixed `today`, repeated calls over the
    /// same inputs return identical results.
    pub fn analyze_with(
        &self,
        text: &str,
        state: &str,
        county: &str,
        today: NaiveDate,
        case_numbers: &mut dyn CaseNumberGenerator,
    ) -> AnalysisResult {
        let case_type = classifier::classify(text);
        let fields = extract::extract_fields(text, today);
        let resolved = self.table.resolve(state);

        tracing::debug!(
            %case_type,
            state,
            matched_exactly = resolved.matched_exactly,
            "analyzing complaint"
        );

        let filing_deadline =
            deadlines::filing_deadline(fields.service_date, resolved.rules.response_deadline_days);
        let urgency_level = deadlines::urgency(filing_deadline, today);

        let legal_issues = issues::infer_legal_issues(text);
        let fdcpa_violations = fdcpa::detect_fdcpa_violations(text);
        let statute_of_limitations = deadlines::statute_of_limitations(
            case_type,
            fields.service_date,
            &resolved.rules,
            today,
        );

        let risk_assessment = risk::score_risk(
            &legal_issues,
            &fdcpa_violations,
            statute_of_limitations.expired,
        );
        let recommended_actions = risk::recommended_actions(risk_assessment.overall_risk);
        let response_strategy = risk::response_strategy(&legal_issues, &fdcpa_violations);

        let mut result = AnalysisResult {
            document_type: DOCUMENT_TYPE.to_string(),
            case_type,
            state: state.to_string(),
            county: county.to_string(),
            plaintiff: fields.plaintiff,
            defendant: fields.defendant,
            amount: fields.amount,
            service_date: fields.service_date,
            filing_deadline,
            urgency_level,
            legal_issues: legal_issues.clone(),
            recommended_defenses: defenses::recommended_defenses(&legal_issues),
            statute_of_limitations,
            fdcpa_violations: fdcpa_violations.clone(),
            response_strategy,
            filing_instructions: court::filing_instructions(state, county),
            court_information: court::court_info(state, county),
            generated_response: String::new(),
            affirmative_defenses: defenses::affirmative_defenses(&legal_issues),
            counterclaims: fdcpa::counterclaims(&fdcpa_violations),
            risk_assessment,
            recommended_actions,
        };

        result.generated_response =
            render_document(DocumentKind::Answer, &result, case_numbers, today);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use response_engine::{render_report, FixedCaseNumber};
    use shared_types::{CaseType, RiskLevel, UrgencyLevel, UNKNOWN_PLAINTIFF};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const CALIFORNIA_COMPLAINT: &str = "\
Plaintiff: Midland Credit Management
Defendant: Jane Smith
The plaintiff, as assignee, seeks $3,200.00 on a credit card account.
The debt collector continued to threaten the defendant with arrest.
Service date: 6/1/2024.";

    #[test]
    fn test_california_fdcpa_scenario() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze(
            CALIFORNIA_COMPLAINT,
            "California",
            "Los Angeles",
            date(2024, 6, 10),
        );

        assert_eq!(result.case_type, CaseType::CreditCard);
        assert_eq!(result.plaintiff, "Midland Credit Management");
        assert_eq!(result.defendant, "Jane Smith");
        assert_eq!(result.amount, "$3,200.00");
        assert_eq!(result.service_date, date(2024, 6, 1));
        // California allows 30 days to answer
        assert_eq!(result.filing_deadline, date(2024, 7, 1));
        assert_eq!(result.urgency_level, UrgencyLevel::Low);

        // Assignee without "original creditor" flags standing; "threaten"
        // flags harassment
        assert!(result
            .legal_issues
            .iter()
            .any(|i| i.description.contains("standing")));
        assert_eq!(result.fdcpa_violations.len(), 1);
        assert!(!result.counterclaims.is_empty());

        // Strong defense plus violations lands in the low-risk branch
        assert_eq!(result.risk_assessment.overall_risk, RiskLevel::Low);
        assert_eq!(result.response_strategy.primary, "File Answer with Counterclaims");
        assert!(!result.statute_of_limitations.expired);
        assert_eq!(result.statute_of_limitations.time_limit, "4 years");
    }

    #[test]
    fn test_unmatched_state_falls_back_to_defaults() {
        let engine = AnalysisEngine::default();
        let text = "\
Plaintiff: Acme Recovery
Defendant: John Roe
The complaint alleges an unpaid personal loan. The claim is time barred
under the statute of limitations. Served: 1/15/2019.";
        let result = engine.analyze(text, "Oregon", "Multnomah", date(2024, 6, 10));

        assert_eq!(result.case_type, CaseType::PersonalLoan);
        // Default rules: 21-day deadline, 4-year statute
        assert_eq!(result.filing_deadline, date(2019, 2, 5));
        assert_eq!(result.statute_of_limitations.time_limit, "4 years");
        assert!(result.statute_of_limitations.expired);

        // SOL issue is High severity; with the statute expired the risk is low
        assert_eq!(result.risk_assessment.overall_risk, RiskLevel::Low);
        assert!(result
            .risk_assessment
            .factors
            .contains(&"Debt may be time-barred".to_string()));
    }

    #[test]
    fn test_keyword_free_text_yields_other_and_no_issues() {
        let engine = AnalysisEngine::default();
        let text = "\
The parties met on several occasions.
Papers were delivered by personal service at the residence.";
        let result = engine.analyze(text, "Texas", "Travis", date(2024, 6, 10));

        assert_eq!(result.case_type, CaseType::Other);
        assert!(result.legal_issues.is_empty());
        assert!(result.fdcpa_violations.is_empty());
        assert_eq!(result.plaintiff, UNKNOWN_PLAINTIFF);

        // The unconditional defenses remain
        assert_eq!(result.recommended_defenses.len(), 3);
        assert_eq!(result.risk_assessment.overall_risk, RiskLevel::High);
        // No date in the text: service date falls back to five days ago
        assert_eq!(result.service_date, date(2024, 6, 5));
    }

    #[test]
    fn test_analysis_is_deterministic_with_fixed_inputs() {
        let engine = AnalysisEngine::default();
        let today = date(2024, 6, 10);
        let mut first_gen = FixedCaseNumber("2024CV7777".to_string());
        let mut second_gen = FixedCaseNumber("2024CV7777".to_string());

        let first = engine.analyze_with(
            CALIFORNIA_COMPLAINT,
            "California",
            "Los Angeles",
            today,
            &mut first_gen,
        );
        let second = engine.analyze_with(
            CALIFORNIA_COMPLAINT,
            "California",
            "Los Angeles",
            today,
            &mut second_gen,
        );

        assert_eq!(first, second);
        assert!(first.generated_response.contains("Case No. 2024CV7777"));
    }

    #[test]
    fn test_generated_answer_reflects_analysis() {
        let engine = AnalysisEngine::default();
        let mut gen = FixedCaseNumber("2024CV0001".to_string());
        let result = engine.analyze_with(
            CALIFORNIA_COMPLAINT,
            "California",
            "Los Angeles",
            date(2024, 6, 10),
            &mut gen,
        );

        assert!(result.generated_response.contains("ANSWER TO COMPLAINT"));
        assert!(result.generated_response.contains("Jane Smith"));
        assert!(result
            .generated_response
            .contains("Midland Credit Management"));
        assert!(result.generated_response.contains("COUNTERCLAIMS"));
    }

    #[test]
    fn test_report_round_trip_covers_findings() {
        let engine = AnalysisEngine::default();
        let result = engine.analyze(
            CALIFORNIA_COMPLAINT,
            "California",
            "Los Angeles",
            date(2024, 6, 10),
        );
        let report = render_report(&result);

        for issue in &result.legal_issues {
            assert!(report.contains(&issue.description));
        }
        for defense in &result.recommended_defenses {
            assert!(report.contains(&defense.name));
        }
        for violation in &result.fdcpa_violations {
            assert!(report.contains(&violation.description));
        }
        assert!(report.contains("Los Angeles County Court"));
    }
}
