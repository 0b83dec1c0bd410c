//! Fixed defense catalog
//!
//! The catalog never invents defense types: three entries are always
//! recommended, and the FDCPA entry joins them only when an FDCPA issue was
//! flagged. The success rates are illustrative placeholder constants, not
//! statistically derived figures.

use shared_types::{Defense, IssueKind, LegalIssue};

pub const STANDING_SUCCESS_RATE: f64 = 0.70;
pub const SOL_SUCCESS_RATE: f64 = 0.80;
pub const FDCPA_SUCCESS_RATE: f64 = 0.60;
pub const VALIDATION_SUCCESS_RATE: f64 = 0.50;

/// Defenses recommended for this case, in fixed catalog order
pub fn recommended_defenses(issues: &[LegalIssue]) -> Vec<Defense> {
    let mut defenses = vec![
        Defense {
            name: "Lack of Standing".to_string(),
            description: "Plaintiff lacks standing to bring this action".to_string(),
            success_rate: STANDING_SUCCESS_RATE,
            requirements: vec![
                "Plaintiff must prove ownership of debt".to_string(),
                "Chain of assignment must be clear".to_string(),
            ],
            case_law: vec![
                "Standing is a fundamental requirement".to_string(),
                "Plaintiff bears burden of proof".to_string(),
            ],
        },
        Defense {
            name: "Statute of Limitations".to_string(),
            description: "Action is barred by applicable statute of limitations".to_string(),
            success_rate: SOL_SUCCESS_RATE,
            requirements: vec![
                "Debt must be time-barred".to_string(),
                "Proper calculation of time period".to_string(),
            ],
            case_law: vec![
                "Statute of limitations is an affirmative defense".to_string(),
                "Must be pleaded specifically".to_string(),
            ],
        },
    ];

    if issues.iter().any(|issue| issue.kind == IssueKind::Fdcpa) {
        defenses.push(Defense {
            name: "FDCPA Violations".to_string(),
            description: "Plaintiff violated Fair Debt Collection Practices Act".to_string(),
            success_rate: FDCPA_SUCCESS_RATE,
            requirements: vec![
                "Must be third-party debt collector".to_string(),
                "Specific violation must be proven".to_string(),
            ],
            case_law: vec![
                "FDCPA provides statutory damages".to_string(),
                "Violations can result in attorney fees".to_string(),
            ],
        });
    }

    defenses.push(Defense {
        name: "Lack of Validation".to_string(),
        description: "Plaintiff failed to provide proper debt validation".to_string(),
        success_rate: VALIDATION_SUCCESS_RATE,
        requirements: vec![
            "Must request validation within 30 days".to_string(),
            "Plaintiff must respond with verification".to_string(),
        ],
        case_law: vec![
            "FDCPA requires validation upon request".to_string(),
            "Failure to validate can be defense".to_string(),
        ],
    });

    defenses
}

/// Affirmative defense names pleaded in the generated Answer
pub fn affirmative_defenses(issues: &[LegalIssue]) -> Vec<String> {
    let mut defenses = vec![
        "Lack of standing".to_string(),
        "Statute of limitations".to_string(),
        "Failure to state a claim".to_string(),
        "Lack of personal jurisdiction".to_string(),
        "Improper venue".to_string(),
    ];

    if issues.iter().any(|issue| issue.kind == IssueKind::Fdcpa) {
        defenses.push("FDCPA violations".to_string());
    }

    defenses
}
