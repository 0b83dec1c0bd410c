//! FDCPA violation detection and counterclaim derivation

use shared_types::{FdcpaViolation, FdcpaViolationKind};

/// Statutory damages cap quoted for every detected violation
pub const FDCPA_DAMAGES: &str = "Up to $1,000 per violation";

pub fn detect_fdcpa_violations(text: &str) -> Vec<FdcpaViolation> {
    let lower = text.to_lowercase();
    let mut violations = Vec::new();

    if lower.contains("harass") || lower.contains("threaten") {
        violations.push(FdcpaViolation {
            kind: FdcpaViolationKind::Harassment,
            description: "Potential harassment in debt collection".to_string(),
            damages: FDCPA_DAMAGES.to_string(),
            evidence: vec![
                "Threatening language".to_string(),
                "Excessive calls".to_string(),
            ],
        });
    }

    if lower.contains("false") || lower.contains("misrepresent") {
        violations.push(FdcpaViolation {
            kind: FdcpaViolationKind::FalseRepresentation,
            description: "False or misleading representations".to_string(),
            damages: FDCPA_DAMAGES.to_string(),
            evidence: vec![
                "False statements about debt".to_string(),
                "Misleading legal status".to_string(),
            ],
        });
    }

    violations
}

/// One counterclaim entry per detected violation
pub fn counterclaims(violations: &[FdcpaViolation]) -> Vec<String> {
    violations
        .iter()
        .map(|violation| format!("FDCPA violation - {}", violation.kind.label()))
        .collect()
}
