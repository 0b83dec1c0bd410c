//! Legal-issue inference over raw complaint text
//!
//! Four independent keyword checks, each yielding zero or one issue. The
//! production order is fixed (standing, statute of limitations, FDCPA,
//! service) so downstream report rendering is deterministic.

use shared_types::{IssueKind, LegalIssue, Severity};

pub fn infer_legal_issues(text: &str) -> Vec<LegalIssue> {
    let lower = text.to_lowercase();
    let mut issues = Vec::new();

    let mentions_original_creditor = lower.contains("original creditor");

    if lower.contains("assignee") && !mentions_original_creditor {
        issues.push(LegalIssue {
            kind: IssueKind::Standing,
            description: "Plaintiff may lack standing to sue as assignee".to_string(),
            severity: Severity::High,
            evidence: vec![
                "No proof of assignment".to_string(),
                "No chain of title".to_string(),
            ],
        });
    }

    if lower.contains("time barred") || lower.contains("statute of limitations") {
        issues.push(LegalIssue {
            kind: IssueKind::StatuteOfLimitations,
            description: "Potential statute of limitations defense".to_string(),
            severity: Severity::High,
            evidence: vec![
                "Debt may be time-barred".to_string(),
                "Check applicable statute".to_string(),
            ],
        });
    }

    if lower.contains("debt collector") && !mentions_original_creditor {
        issues.push(LegalIssue {
            kind: IssueKind::Fdcpa,
            description: "Potential FDCPA violations by debt collector".to_string(),
            severity: Severity::Medium,
            evidence: vec![
                "Third-party debt collector".to_string(),
                "Check for FDCPA compliance".to_string(),
            ],
        });
    }

    if !lower.contains("personal service") && !lower.contains("substitute service") {
        issues.push(LegalIssue {
            kind: IssueKind::Service,
            description: "Potential improper service of process".to_string(),
            severity: Severity::Medium,
            evidence: vec![
                "Service method unclear".to_string(),
                "Check state service requirements".to_string(),
            ],
        });
    }

    issues
}
