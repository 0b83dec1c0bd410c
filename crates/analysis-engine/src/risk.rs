//! Risk scoring and response strategy
//!
//! A discrete three-branch decision table, not a continuous model. The
//! percentages are fixed illustrative constants keyed to the branch.

use shared_types::{
    FdcpaViolation, IssueKind, LegalIssue, ResponseStrategy, RiskAssessment, RiskLevel,
};

/// Pure function of the issue set, violations, and SOL expiry.
///
/// A "strong defense" is any issue at High or Critical severity. Strong
/// defense plus either FDCPA violations or an expired statute puts the
/// defendant in the low-risk bucket; strong defense alone is medium; no
/// strong defense is high.
pub fn score_risk(
    issues: &[LegalIssue],
    violations: &[FdcpaViolation],
    sol_expired: bool,
) -> RiskAssessment {
    let has_strong_defense = issues.iter().any(|issue| issue.severity.is_strong());
    let has_violations = !violations.is_empty();

    let (overall_risk, default_risk, judgment_risk, wage_garnishment_risk, bank_levy_risk) =
        if has_strong_defense && (has_violations || sol_expired) {
            (RiskLevel::Low, 20, 10, 5, 5)
        } else if has_strong_defense {
            (RiskLevel::Medium, 40, 25, 15, 10)
        } else {
            (RiskLevel::High, 80, 60, 40, 30)
        };

    RiskAssessment {
        overall_risk,
        default_risk,
        judgment_risk,
        wage_garnishment_risk,
        bank_levy_risk,
        factors: risk_factors(issues, violations, sol_expired),
    }
}

/// Fixed descriptive factor per triggering condition, in fixed order:
/// SOL expired, FDCPA present, standing issue present.
fn risk_factors(
    issues: &[LegalIssue],
    violations: &[FdcpaViolation],
    sol_expired: bool,
) -> Vec<String> {
    let mut factors = Vec::new();

    if sol_expired {
        factors.push("Debt may be time-barred".to_string());
    }
    if !violations.is_empty() {
        factors.push("FDCPA violations present".to_string());
    }
    if issues.iter().any(|issue| issue.kind == IssueKind::Standing) {
        factors.push("Standing issues identified".to_string());
    }

    factors
}

/// Recommended next steps keyed to the overall risk bucket
pub fn recommended_actions(overall_risk: RiskLevel) -> Vec<String> {
    let actions: &[&str] = match overall_risk {
        RiskLevel::Low => &[
            "File answer with all defenses",
            "Consider filing motion to dismiss",
            "Prepare for settlement negotiations",
        ],
        RiskLevel::Medium => &[
            "File answer within deadline",
            "Request debt validation",
            "Consider settlement options",
        ],
        RiskLevel::High => &[
            "File answer immediately",
            "Contact legal aid or attorney",
            "Consider bankruptcy if appropriate",
        ],
    };
    actions.iter().map(|s| s.to_string()).collect()
}

/// Three-branch strategy table mirroring the risk buckets
pub fn response_strategy(
    issues: &[LegalIssue],
    violations: &[FdcpaViolation],
) -> ResponseStrategy {
    let has_strong_defenses = issues.iter().any(|issue| issue.severity.is_strong());
    let has_fdcpa_violations = !violations.is_empty();

    if has_strong_defenses && has_fdcpa_violations {
        ResponseStrategy {
            primary: "File Answer with Counterclaims".to_string(),
            secondary: vec![
                "Assert all affirmative defenses".to_string(),
                "File FDCPA counterclaim".to_string(),
            ],
            timeline: "File within deadline, then negotiate".to_string(),
            estimated_cost: "$500-2000".to_string(),
        }
    } else if has_strong_defenses {
        ResponseStrategy {
            primary: "File Answer with Defenses".to_string(),
            secondary: vec![
                "Assert statute of limitations".to_string(),
                "Challenge standing".to_string(),
            ],
            timeline: "File answer, then seek dismissal".to_string(),
            estimated_cost: "$300-1000".to_string(),
        }
    } else {
        ResponseStrategy {
            primary: "Negotiate Settlement".to_string(),
            secondary: vec![
                "Request debt validation".to_string(),
                "Offer payment plan".to_string(),
            ],
            timeline: "Contact plaintiff immediately".to_string(),
            estimated_cost: "$100-500".to_string(),
        }
    }
}
